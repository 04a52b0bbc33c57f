//! Tracing subscriber setup.

use tracing::Level;

/// Maps `-v` occurrences onto the configured level
///
/// No flag keeps `configured`; `-v` raises it to debug and `-vv` to trace.
pub fn effective_level(configured: &str, verbosity: u8) -> Level {
    match verbosity {
        0 => configured.parse().unwrap_or(Level::INFO),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the compact stderr subscriber once per process
///
/// Later calls are ignored so tests and embedders can install their own.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
