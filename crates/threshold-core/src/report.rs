//! Output sink abstraction.

use async_trait::async_trait;

use crate::error::CheckError;

/// Sink for the observable, line-oriented output of a check.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Write one line of output. The implementation supplies the line
    /// terminator.
    async fn emit(&self, line: &str) -> Result<(), CheckError>;
}
