//! Structured logging initialization.
//!
//! The RUST_LOG environment variable takes precedence over the configured level.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
pub fn init(config: &LoggingConfig) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.level.as_str())
    };

    let registry = tracing_subscriber::registry().with(filter);

    match (config.format, config.timestamps) {
        (LogFormat::Pretty, true) => registry.with(fmt::layer().with_ansi(true)).init(),
        (LogFormat::Pretty, false) => registry
            .with(fmt::layer().with_ansi(true).without_time())
            .init(),
        (LogFormat::Compact, true) => registry.with(fmt::layer().compact()).init(),
        (LogFormat::Compact, false) => registry
            .with(fmt::layer().compact().without_time())
            .init(),
        (LogFormat::Json, true) => registry.with(fmt::layer().json()).init(),
        (LogFormat::Json, false) => registry.with(fmt::layer().json().without_time()).init(),
    }
}
