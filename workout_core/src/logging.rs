//! Tracing setup for the fitcalc binary.
//!
//! Log lines go to stderr so stdout carries only report lines.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at WARN, overridable with RUST_LOG
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a fallback level for when RUST_LOG is unset
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
