//! Tracing setup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Map the `-v` count to a default level.
pub fn level_for(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the deletion announcements and JSON output.
pub fn init(verbose: u8) {
    let level = level_for(verbose);
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
    tracing::debug!("tracing initialized with level: {}", level);
}
