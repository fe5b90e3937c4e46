//! Q1.15 quantization utilities.
use crate::error::{FixtureError, Result};

pub const FRAC_BITS: u32 = 15;
pub const SCALE: i64 = 1 << FRAC_BITS;

/// Tie-break used when `x * SCALE` lands exactly halfway between two integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// Ties go away from zero.
    HalfAwayFromZero,
}

impl RoundingMode {
    #[inline]
    pub fn round(self, v: f64) -> f64 {
        match self {
            RoundingMode::HalfEven => v.round_ties_even(),
            RoundingMode::HalfAwayFromZero => v.round(),
        }
    }
}

/// Quantize a real to Q1.15. No clamping to the 16-bit range is applied.
pub fn to_q15(x: f64, rounding: RoundingMode) -> Result<i64> {
    if !x.is_finite() {
        return Err(FixtureError::NonFinite(x));
    }
    let v = rounding.round(x * SCALE as f64);
    // i64::MAX as f64 rounds up to 2^63, which itself does not fit
    if v < i64::MIN as f64 || v >= i64::MAX as f64 {
        return Err(FixtureError::QuantOverflow(x));
    }
    Ok(v as i64)
}

#[inline]
pub fn from_q15(q: i64) -> f64 { q as f64 / SCALE as f64 }

pub fn quantize_all(xs: &[f64], rounding: RoundingMode) -> Result<Vec<i64>> {
    xs.iter().map(|&x| to_q15(x, rounding)).collect()
}

/// Round to `digits` decimal places, correctly rounded from the exact binary value.
///
/// Goes through the exact decimal formatter and back so the result is the
/// double nearest to the rounded decimal, not `(x * 10^d).round() / 10^d`
/// (which can be off by one ulp and then off by one Q1.15 unit).
pub fn round_decimal(x: f64, digits: usize) -> Result<f64> {
    format!("{:.*}", digits, x)
        .parse::<f64>()
        .map_err(|_| FixtureError::DecimalRound { value: x, digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_follow_rounding_mode() {
        // 0.5 / 32768 and 1.5 / 32768 are exact halves after scaling
        let half = 0.5 / 32768.0;
        let three_halves = 1.5 / 32768.0;
        assert_eq!(to_q15(half, RoundingMode::HalfEven).unwrap(), 0);
        assert_eq!(to_q15(half, RoundingMode::HalfAwayFromZero).unwrap(), 1);
        assert_eq!(to_q15(three_halves, RoundingMode::HalfEven).unwrap(), 2);
        assert_eq!(to_q15(-half, RoundingMode::HalfEven).unwrap(), 0);
        assert_eq!(to_q15(-half, RoundingMode::HalfAwayFromZero).unwrap(), -1);
    }

    #[test]
    fn out_of_envelope_values_pass_through() {
        assert_eq!(to_q15(1.0, RoundingMode::HalfEven).unwrap(), 32768);
        assert_eq!(to_q15(-1.0, RoundingMode::HalfEven).unwrap(), -32768);
        assert_eq!(to_q15(3.0, RoundingMode::HalfEven).unwrap(), 98304);
    }

    #[test]
    fn rejects_non_finite_and_huge() {
        assert!(matches!(to_q15(f64::NAN, RoundingMode::HalfEven), Err(FixtureError::NonFinite(_))));
        assert!(matches!(to_q15(f64::INFINITY, RoundingMode::HalfEven), Err(FixtureError::NonFinite(_))));
        assert!(matches!(to_q15(1e300, RoundingMode::HalfEven), Err(FixtureError::QuantOverflow(_))));
    }

    #[test]
    fn decimal_rounding() {
        assert_eq!(round_decimal(0.2788535969157674, 4).unwrap(), 0.2789);
        assert_eq!(round_decimal(-0.5240707458162173, 4).unwrap(), -0.5241);
        assert_eq!(round_decimal(0.08845845059190371, 4).unwrap(), 0.0885);
    }
}
