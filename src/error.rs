//! Error types for fixture generation.

/// Errors raised while drawing, quantizing, computing or writing a fixture.
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    /// Quantizer input was NaN or infinite
    #[error("cannot quantize non-finite value {0}")]
    NonFinite(f64),

    /// Scaled value does not fit the quantized integer type
    #[error("quantized value out of range: {0} * 32768 does not fit i64")]
    QuantOverflow(f64),

    /// Decimal rounding produced an unparsable string
    #[error("decimal rounding of {value} to {digits} digits failed")]
    DecimalRound { value: f64, digits: usize },

    /// Product or running sum exceeded the accumulator
    #[error("accumulator overflow at element {index}")]
    AccumulatorOverflow { index: usize },

    /// Shifted accumulator does not fit a golden value
    #[error("golden value {0} does not fit i64")]
    GoldenOutOfRange(i128),

    /// Weight row and input vector differ in length
    #[error("row {row} has {actual} elements, input vector has {expected}")]
    LengthMismatch { row: usize, expected: usize, actual: usize },

    /// Loaded or generated fixture does not have the declared shape
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch { what: &'static str, expected: usize, actual: usize },

    /// Stored golden value disagrees with the recomputed one
    #[error("golden[{row}] is {stored}, reference computes {expected}")]
    GoldenMismatch { row: usize, stored: i64, expected: i64 },

    /// File I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;
