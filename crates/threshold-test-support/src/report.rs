//! Test reporters — mock `Reporter` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use threshold_core::error::CheckError;
use threshold_core::report::Reporter;

/// A reporter that records every emitted line and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Create an empty recording reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all lines emitted so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl Reporter for RecordingReporter {
    async fn emit(&self, line: &str) -> Result<(), CheckError> {
        self.lines.lock().unwrap().push(line.to_owned());
        Ok(())
    }
}

/// A reporter whose output stream is always closed. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingReporter;

#[async_trait]
impl Reporter for FailingReporter {
    async fn emit(&self, _line: &str) -> Result<(), CheckError> {
        Err(CheckError::Output(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "output closed",
        )))
    }
}
