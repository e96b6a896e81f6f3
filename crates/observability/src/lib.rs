//! `cedarboard-observability` — process-wide tracing setup.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the process.
///
/// Filtering comes from `RUST_LOG` (default `info`); output is JSON lines.
/// Safe to call more than once (later calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init();
}
