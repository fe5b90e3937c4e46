use log::{debug, info};
use crate::draw::draw_reals;
use crate::error::{FixtureError, Result};
use crate::golden::golden_outputs;
use crate::quant::{quantize_all, RoundingMode};
use crate::rng::Generator;

#[derive(Clone, Debug)]
pub struct FixtureParams {
    pub n: usize,                // input vector length
    pub m: usize,                // neuron / weight-row count
    pub seed: i64,               // negative seeds are accepted
    pub rounding: RoundingMode,  // quantizer tie-break
    pub generator: Generator,
}

impl Default for FixtureParams {
    fn default() -> Self {
        Self { n: 8, m: 4, seed: 0, rounding: RoundingMode::HalfEven, generator: Generator::Mt19937 }
    }
}

/// Quantized inputs, weights and the golden outputs they produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub input: Vec<i64>,
    pub weights: Vec<Vec<i64>>, // m x n
    pub golden: Vec<i64>,       // m
}

pub fn generate(params: &FixtureParams) -> Result<Fixture> {
    let mut src = params.generator.source(params.seed);
    let reals = draw_reals(src.as_mut(), params.n, params.m)?;
    debug!(
        "drew {} inputs and {}x{} weights (seed={}, generator={:?})",
        reals.input.len(),
        params.m,
        params.n,
        params.seed,
        params.generator
    );

    let input = quantize_all(&reals.input, params.rounding)?;
    let weights = reals.weights.iter()
        .map(|row| quantize_all(row, params.rounding))
        .collect::<Result<Vec<_>>>()?;
    let golden = golden_outputs(&input, &weights)?;
    info!(
        "generated fixture n={} m={} seed={} rounding={:?}",
        params.n, params.m, params.seed, params.rounding
    );
    Ok(Fixture { input, weights, golden })
}

impl Fixture {
    pub fn n(&self) -> usize { self.input.len() }
    pub fn m(&self) -> usize { self.weights.len() }

    /// Check shapes and recompute every golden value.
    pub fn verify(&self) -> Result<()> {
        if self.golden.len() != self.m() {
            return Err(FixtureError::ShapeMismatch { what: "golden", expected: self.m(), actual: self.golden.len() });
        }
        let expected = golden_outputs(&self.input, &self.weights)?;
        for (row, (&stored, &exp)) in self.golden.iter().zip(&expected).enumerate() {
            if stored != exp {
                return Err(FixtureError::GoldenMismatch { row, stored, expected: exp });
            }
        }
        Ok(())
    }
}
