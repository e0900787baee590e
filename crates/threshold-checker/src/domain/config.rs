//! Checker configuration.

use serde::{Deserialize, Serialize};
use threshold_core::error::CheckError;

/// Draws strictly greater than this settle as `AboveThreshold`.
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Exclusive upper bound of the draw range `[0, upper_bound)`.
pub const DEFAULT_UPPER_BOUND: u32 = 100;

/// Parameters of a threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Classification threshold (strict greater-than).
    pub threshold: u32,
    /// Exclusive upper bound of the draw.
    pub upper_bound: u32,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

/// Checks that the draw range `[0, upper_bound)` is non-empty.
///
/// # Errors
///
/// Returns `CheckError::Validation` if `upper_bound` is zero.
pub fn validate_upper_bound(upper_bound: u32) -> Result<(), CheckError> {
    if upper_bound == 0 {
        return Err(CheckError::Validation(
            "upper_bound must be greater than zero".to_owned(),
        ));
    }
    Ok(())
}

impl CheckerConfig {
    /// Checks that the draw range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Validation` if `upper_bound` is zero.
    pub fn validate(&self) -> Result<(), CheckError> {
        validate_upper_bound(self.upper_bound)
    }
}
