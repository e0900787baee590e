//! Outcome handlers: the caller-side continuations that turn an outcome into
//! a human-readable message.

use threshold_core::error::CheckError;
use threshold_core::report::Reporter;

use crate::domain::config::CheckerConfig;
use crate::domain::outcome::Outcome;

/// Message emitted when the draw is above the threshold.
#[must_use]
pub fn above_threshold_message(threshold: u32) -> String {
    format!("Number is greater than {threshold}")
}

/// Message emitted when the draw is at or below the threshold.
///
/// The wording says "less than" even when the draw equals the threshold.
/// It is kept as-is; the classification boundary itself is strict.
#[must_use]
pub fn at_or_below_threshold_message(threshold: u32) -> String {
    format!("Number is less than {threshold}")
}

/// Attaches both message handlers to `outcome` and emits the one that fires.
///
/// # Errors
///
/// Returns `CheckError::Output` if the reporter fails.
pub async fn report_outcome(
    outcome: Outcome,
    config: &CheckerConfig,
    reporter: &dyn Reporter,
) -> Result<(), CheckError> {
    let message = outcome.settle(
        || above_threshold_message(config.threshold),
        || at_or_below_threshold_message(config.threshold),
    );
    reporter.emit(&message).await
}
