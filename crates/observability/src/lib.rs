//! Tracing/logging setup shared by stockroom front ends.
//!
//! The domain crates stay log-free; whatever sits in front of the catalog
//! (CLI, service, tests) calls [`init`] once at startup and emits its own
//! `tracing` events.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering is driven by `RUST_LOG` (default `info`); output is JSON with
/// timestamps. Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
