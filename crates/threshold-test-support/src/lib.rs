//! Shared test doubles for the threshold checker.

mod report;
mod rng;

pub use report::{FailingReporter, RecordingReporter};
pub use rng::{FixedRng, SequenceRng};
