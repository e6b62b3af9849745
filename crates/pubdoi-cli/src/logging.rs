//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal failures (unreadable CSV, unreachable registry)
//! - `warn`: per-row failures the run continues past
//! - `info`: per-row progress, upload and registration confirmations
//! - `debug`: request details, signing and mapping internals

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (off, error, warn, info, debug, trace).
    pub level: LevelFilter,
    /// Output format: pretty, compact, or json.
    pub format: LogFormat,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: true,
            with_target: false,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at application startup.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config.level);
    match config.format {
        LogFormat::Json => {
            // Machine-readable output never carries color codes.
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: LevelFilter) -> EnvFilter {
    let level_str = level.to_string().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // External crates stay at warn level to reduce noise
        EnvFilter::new(format!(
            "warn,pubdoi_cli={level},pubdoi_ingest={level},pubdoi_map={level},\
             pubdoi_registry={level},pubdoi_store={level},pubdoi_validate={level}",
            level = level_str
        ))
    })
}
