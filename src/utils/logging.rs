//! Logging setup for the `model-report` binary.
//!
//! Installs a global `tracing` subscriber writing to stderr. The filter comes
//! from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Installs the subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
