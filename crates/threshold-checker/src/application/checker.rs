//! The random threshold checker.
//!
//! A check draws one integer, emits it, and settles into an `Outcome`. The
//! RNG `Mutex` is locked only around the synchronous draw, never across an
//! await point.

use std::sync::{Arc, Mutex};

use threshold_core::error::CheckError;
use threshold_core::report::Reporter;
use threshold_core::rng::DeterministicRng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::handlers::report_outcome;
use crate::domain::config::CheckerConfig;
use crate::domain::draw::Draw;
use crate::domain::outcome::Outcome;

/// Draws a number, emits it, and classifies it against a threshold.
pub struct ThresholdChecker {
    config: CheckerConfig,
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    reporter: Arc<dyn Reporter>,
}

impl ThresholdChecker {
    /// Creates a checker over the given random source and output sink.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Validation` if `config` is invalid.
    pub fn new(
        config: CheckerConfig,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self, CheckError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            reporter,
        })
    }

    /// Returns the configuration this checker classifies against.
    #[must_use]
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Returns the sink the checker emits to.
    #[must_use]
    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// Performs one check: draws, emits the draw, then settles.
    ///
    /// Completes exactly once. `AtOrBelowThreshold` is an ordinary outcome,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Infrastructure` if the RNG mutex is poisoned,
    /// `CheckError::DrawOutOfRange` if the RNG ignores the requested range,
    /// or `CheckError::Output` if emitting the draw fails. Nothing is emitted
    /// when the draw itself fails.
    #[instrument(skip(self), fields(check_id = %Uuid::new_v4()))]
    pub async fn check(&self) -> Result<Outcome, CheckError> {
        let draw = {
            let mut rng_guard = self
                .rng
                .lock()
                .map_err(|e| CheckError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
            Draw::roll(&mut *rng_guard, self.config.upper_bound)?
        };
        debug!(draw = draw.value(), "number drawn");

        self.reporter.emit(&draw.to_string()).await?;

        let outcome = Outcome::classify(draw, self.config.threshold);
        info!(
            draw = draw.value(),
            threshold = self.config.threshold,
            outcome = %outcome,
            above_threshold = outcome.is_above_threshold(),
            "check settled"
        );
        Ok(outcome)
    }
}

/// Runs one check and reports its outcome through the checker's reporter:
/// the draw line, then the classification message.
///
/// # Errors
///
/// Returns any error from `ThresholdChecker::check` or from emitting the
/// message.
pub async fn run_once(checker: &ThresholdChecker) -> Result<Outcome, CheckError> {
    let outcome = checker.check().await?;
    report_outcome(outcome, checker.config(), checker.reporter()).await?;
    Ok(outcome)
}
