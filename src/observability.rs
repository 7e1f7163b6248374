//! Logging setup
//!
//! Structured logging goes through `tracing`. Verbosity is controlled with
//! `RUST_LOG` (for example `RUST_LOG=odata_catalog=debug` to see per-query
//! row counts); the default level is `info`. Output goes to stderr so the
//! `query` command's stdout carries only JSON.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global fmt subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
