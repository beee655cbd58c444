//! Logging setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Install the global `tracing` subscriber, honouring `RUST_LOG`.
///
/// Calling it again is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
