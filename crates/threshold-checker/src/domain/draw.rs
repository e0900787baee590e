//! The per-invocation random draw.

use std::fmt;

use threshold_core::error::CheckError;
use threshold_core::rng::DeterministicRng;

use super::config::validate_upper_bound;

/// An integer drawn uniformly from `[0, upper_bound)`.
///
/// A `Draw` can only be constructed inside its range, whatever the random
/// source returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Draw(u32);

impl Draw {
    /// Wraps `value` after checking it lies in `[0, upper_bound)`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::DrawOutOfRange` if `value >= upper_bound`.
    pub fn new(value: u32, upper_bound: u32) -> Result<Self, CheckError> {
        if value >= upper_bound {
            return Err(CheckError::DrawOutOfRange { value, upper_bound });
        }
        Ok(Self(value))
    }

    /// Draws from `rng` over `[0, upper_bound)`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Validation` if `upper_bound` is zero, or
    /// `CheckError::DrawOutOfRange` if the RNG ignores the requested range.
    pub fn roll(rng: &mut dyn DeterministicRng, upper_bound: u32) -> Result<Self, CheckError> {
        validate_upper_bound(upper_bound)?;
        Self::new(rng.next_u32_range(0, upper_bound - 1), upper_bound)
    }

    /// Returns the drawn integer.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
