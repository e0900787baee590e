//! Check error types.

use thiserror::Error;

/// Top-level error type for a threshold check.
///
/// A draw at or below the threshold is an ordinary outcome and is never
/// represented here.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The checker configuration is unusable.
    #[error("validation error: {0}")]
    Validation(String),

    /// The random source produced a value outside the draw range.
    #[error("draw {value} out of range: expected a value in [0, {upper_bound})")]
    DrawOutOfRange {
        /// The value the random source returned.
        value: u32,
        /// The exclusive upper bound of the draw range.
        upper_bound: u32,
    },

    /// An infrastructure error (e.g. a poisoned lock around the random source).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),

    /// Writing to the output stream failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
