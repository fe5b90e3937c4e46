use q15gen::quant::{from_q15, round_decimal, to_q15, RoundingMode, SCALE};
use q15gen::rng::{Mt19937, UnitSource};

#[test]
fn roundtrip_within_one_lsb() {
    let mut src = Mt19937::new(2024);
    let lsb = 1.0 / SCALE as f64;
    for _ in 0..10_000 {
        let x = src.uniform(-1.0, 1.0);
        for mode in [RoundingMode::HalfEven, RoundingMode::HalfAwayFromZero] {
            let q = to_q15(x, mode).unwrap();
            assert!((from_q15(q) - x).abs() <= lsb, "x={} q={}", x, q);
        }
    }
}

#[test]
fn endpoints() {
    assert_eq!(to_q15(-1.0, RoundingMode::HalfEven).unwrap(), -32768);
    assert_eq!(to_q15(0.0, RoundingMode::HalfEven).unwrap(), 0);
    assert_eq!(to_q15(-0.0, RoundingMode::HalfEven).unwrap(), 0);
    assert_eq!(from_q15(-32768), -1.0);
    assert_eq!(from_q15(16384), 0.5);
}

#[test]
fn decimal_then_quantize_can_differ_from_raw() {
    // raw draw for seed 42 is 0.2788535969157674; 4-digit rounding moves it to 0.2789
    let raw = 0.2788535969157674;
    assert_eq!(to_q15(raw, RoundingMode::HalfEven).unwrap(), 9137);
    let rounded = round_decimal(raw, 4).unwrap();
    assert_eq!(to_q15(rounded, RoundingMode::HalfEven).unwrap(), 9139);
}
