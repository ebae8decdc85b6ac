//! Tracing setup.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the application. `init` is a convenience for binaries and
//! tests that want the events on stderr.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, or by
/// `default_filter` when `RUST_LOG` is unset or invalid.
///
/// Returns `false` when a global subscriber was already installed; that is
/// not an error, so repeated calls are fine.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
