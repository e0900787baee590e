//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a JSON `fmt` subscriber on stderr, filtered by `RUST_LOG`
/// (default `info`). Stdout carries only the check's own output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();
}
