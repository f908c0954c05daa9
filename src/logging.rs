//! Diagnostic logging setup
//!
//! Logs go to stderr; stdout carries the MCP protocol.

use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;

/// Map a configured level name to a filter
///
/// # Errors
/// Returns an error for anything other than trace|debug|info|warn|error.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        other => Err(anyhow!(
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            other
        )),
    }
}

/// Install the global stderr subscriber
pub fn init_logging(level: &str) -> Result<()> {
    let filter = parse_level(level)?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    tracing::info!(
        level = %filter,
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );
    Ok(())
}
