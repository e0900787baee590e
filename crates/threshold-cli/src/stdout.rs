//! Reporter that writes to the process's standard output.

use async_trait::async_trait;
use threshold_core::error::CheckError;
use threshold_core::report::Reporter;
use tokio::io::AsyncWriteExt;

/// Writes each emitted line to stdout and flushes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

#[async_trait]
impl Reporter for StdoutReporter {
    async fn emit(&self, line: &str) -> Result<(), CheckError> {
        let mut out = tokio::io::stdout();
        out.write_all(format!("{line}\n").as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}
