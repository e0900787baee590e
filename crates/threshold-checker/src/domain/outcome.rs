//! Outcome of a threshold check.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::draw::Draw;

/// How a draw compares to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The draw is strictly greater than the threshold.
    AboveThreshold,
    /// The draw is less than or equal to the threshold.
    AtOrBelowThreshold,
}

impl Outcome {
    /// Classifies `draw` against `threshold` (strict greater-than).
    #[must_use]
    pub fn classify(draw: Draw, threshold: u32) -> Self {
        if draw.value() > threshold {
            Self::AboveThreshold
        } else {
            Self::AtOrBelowThreshold
        }
    }

    /// Returns `true` for `AboveThreshold`.
    #[must_use]
    pub fn is_above_threshold(self) -> bool {
        matches!(self, Self::AboveThreshold)
    }

    /// Consumes the outcome and runs exactly one continuation: `on_above` for
    /// `AboveThreshold`, `on_at_or_below` otherwise.
    pub fn settle<R>(
        self,
        on_above: impl FnOnce() -> R,
        on_at_or_below: impl FnOnce() -> R,
    ) -> R {
        match self {
            Self::AboveThreshold => on_above(),
            Self::AtOrBelowThreshold => on_at_or_below(),
        }
    }

    /// Stable snake-case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AboveThreshold => "above_threshold",
            Self::AtOrBelowThreshold => "at_or_below_threshold",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
