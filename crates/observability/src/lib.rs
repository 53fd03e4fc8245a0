//! Tracing/logging setup shared by every process embedding the domain crates.
//!
//! The domain crates only emit `tracing` events; which subscriber collects
//! them is the embedding process's choice. This crate provides the default:
//! JSON lines, env-filtered.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process, filtered via `RUST_LOG`
/// (default `info`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
}

/// Initialize with an explicit filter, for embedders that don't read the
/// environment (tests, managed runtimes).
pub fn init_with_filter(filter: EnvFilter) {
    // JSON logs + timestamps; subsequent try_init calls fail quietly.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
