//! Threshold Check entry point.

use std::error::Error;
use std::sync::Arc;

use threshold_checker::application::checker::run_once;
use threshold_cli::rng::SystemRng;
use threshold_cli::stdout::StdoutReporter;
use threshold_cli::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init_tracing();

    let checker =
        threshold_cli::build_checker(SystemRng::from_os_rng(), Arc::new(StdoutReporter))?;

    match run_once(&checker).await {
        Ok(outcome) => {
            tracing::info!(%outcome, "run complete");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "check failed");
            Err(e.into())
        }
    }
}
