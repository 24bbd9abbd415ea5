//! Diagnostic logging for the demo binaries.
//!
//! Demo output goes to stdout; diagnostics go to stderr through `tracing`
//! and stay silent unless `RUST_LOG` asks for them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_FILTER`].
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_from(directives.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
