//! Threshold Check — infrastructure adapters and process wiring.

pub mod rng;
pub mod stdout;
pub mod telemetry;

use std::sync::{Arc, Mutex};

use threshold_checker::application::checker::ThresholdChecker;
use threshold_checker::domain::config::CheckerConfig;
use threshold_core::error::CheckError;
use threshold_core::report::Reporter;
use threshold_core::rng::DeterministicRng;

/// Builds a checker with the default configuration over the given adapters.
///
/// # Errors
///
/// Returns `CheckError::Validation` if the default configuration is invalid.
pub fn build_checker(
    rng: impl DeterministicRng + Send + 'static,
    reporter: Arc<dyn Reporter>,
) -> Result<ThresholdChecker, CheckError> {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    ThresholdChecker::new(CheckerConfig::default(), rng, reporter)
}
