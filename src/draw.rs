use crate::error::Result;
use crate::quant::round_decimal;
use crate::rng::UnitSource;

pub const DRAW_LO: f64 = -1.0;
pub const DRAW_HI: f64 = 1.0;
pub const DECIMALS: usize = 4;

/// Real-valued draw before quantization.
#[derive(Clone, Debug, PartialEq)]
pub struct RealDraw {
    pub input: Vec<f64>,
    pub weights: Vec<Vec<f64>>, // m x n
}

fn draw_one(src: &mut dyn UnitSource) -> Result<f64> {
    round_decimal(src.uniform(DRAW_LO, DRAW_HI), DECIMALS)
}

/// Draw the whole input vector, then the weight rows one by one, each row left to right.
pub fn draw_reals(src: &mut dyn UnitSource, n: usize, m: usize) -> Result<RealDraw> {
    let mut input = Vec::with_capacity(n);
    for _ in 0..n { input.push(draw_one(src)?); }
    let mut weights = Vec::with_capacity(m);
    for _ in 0..m {
        let mut row = Vec::with_capacity(n);
        for _ in 0..n { row.push(draw_one(src)?); }
        weights.push(row);
    }
    Ok(RealDraw { input, weights })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mt19937;

    #[test]
    fn input_is_drawn_before_weights() {
        let mut a = Mt19937::new(42);
        let d = draw_reals(&mut a, 2, 1).unwrap();
        // one flat stream: in[0], in[1], w[0][0], ...
        assert_eq!(d.input, vec![0.2789, -0.95]);
        assert_eq!(d.weights, vec![vec![-0.4499, -0.5536]]);
    }
}
