//! Reference fixed-point dot product.
use crate::error::{FixtureError, Result};
use crate::quant::FRAC_BITS;

/// Dot product of two Q1.15 vectors rescaled back to Q1.15.
///
/// Products are kept at full Q2.30 precision and summed in an `i128` with
/// a checked add, so nothing wraps. The sum is shifted right once by
/// `FRAC_BITS`; `>>` on a signed integer is arithmetic, so negative sums
/// round toward negative infinity. The result is not clamped.
pub fn dot_q15(x: &[i64], w_row: &[i64]) -> Result<i64> {
    let mut acc: i128 = 0;
    for (i, (&a, &b)) in x.iter().zip(w_row).enumerate() {
        // |a * b| <= 2^126, only the running sum can overflow
        acc = acc
            .checked_add(a as i128 * b as i128)
            .ok_or(FixtureError::AccumulatorOverflow { index: i })?;
    }
    let shifted = acc >> FRAC_BITS;
    i64::try_from(shifted).map_err(|_| FixtureError::GoldenOutOfRange(shifted))
}

/// One golden value per weight row, in row order.
pub fn golden_outputs(x: &[i64], weights: &[Vec<i64>]) -> Result<Vec<i64>> {
    let mut out = Vec::with_capacity(weights.len());
    for (r, row) in weights.iter().enumerate() {
        if row.len() != x.len() {
            return Err(FixtureError::LengthMismatch { row: r, expected: x.len(), actual: row.len() });
        }
        out.push(dot_q15(x, row)?);
    }
    Ok(out)
}
