//! Logging setup using simplelog
//!
//! Logs go to the configured `log_file`, or to stderr so they do not mix
//! with the counter listing on stdout. `RUST_LOG` overrides the configured
//! level.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use tally_config::AppConfig;

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn level(config: &AppConfig) -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .or_else(|| parse_level(&config.log_level))
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging
pub fn init(config: &AppConfig) -> Result<()> {
    let level = level(config);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path))?;
            WriteLogger::init(level, log_config, file)
        }
        None => WriteLogger::init(level, log_config, std::io::stderr()),
    }
    .context("Failed to initialize logger")
}
