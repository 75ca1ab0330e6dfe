// src/logging.rs

//! Logging setup for `fanout` using `tracing` + `tracing-subscriber`.
//!
//! The level comes from the `FANOUT_LOG` environment variable (e.g. "info",
//! "debug"), defaulting to `info`. There is no CLI flag for this: the whole
//! argument list belongs to the child command.
//!
//! Logs are sent to STDERR so that stdout stays reserved for the launch /
//! completion notices and the captured command output.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var("FANOUT_LOG")
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::INFO);

    // Send logs to stderr; keep stdout free for command output.
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level_str("debug"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_level_str(" WARN "), Some(tracing::Level::WARN));
        assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    }

    #[test]
    fn rejects_unknown_levels() {
        assert_eq!(parse_level_str("loud"), None);
        assert_eq!(parse_level_str(""), None);
    }
}
