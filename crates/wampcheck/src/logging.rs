//! # Logging Infrastructure
//!
//! Structured logging with tracing for observability.
//!
//! The harness prints exactly one result line to stdout, so all log output
//! goes to stderr. Verbosity is driven by the global `-v` flag; the default
//! level only surfaces warnings.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wampcheck::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::default();
//! init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("harness started");
//! ```

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Error type for logging initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The filter configuration was rejected.
    #[error("Invalid log configuration: {0}")]
    InvalidConfig(String),

    /// The subscriber could not be installed (e.g., already initialized).
    #[error("Failed to initialize logging: {0}")]
    SubscriberInit(String),
}

/// Log level configuration.
///
/// Determines the minimum severity of messages that will be logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Most verbose: trace, debug, info, warn, error
    Trace,
    /// Verbose: debug, info, warn, error
    Debug,
    /// Standard: info, warn, error
    Info,
    /// Quiet: warn, error (default for a one-shot CLI)
    #[default]
    Warn,
    /// Quietest: error only
    Error,
}

impl LogLevel {
    /// Get the string representation for the env filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log output format configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format (default).
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum severity of messages that will be logged.
    pub level: LogLevel,

    /// Output format for log messages.
    pub format: LogFormat,
}

/// Initialize the logging system.
///
/// Installs a tracing subscriber writing to stderr. stdout is reserved for
/// the command's single result line.
///
/// # Errors
///
/// Returns [`LogError`] if the filter is invalid or a subscriber is already
/// installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(config.level.as_str())
        .map_err(|e| LogError::InvalidConfig(e.to_string()))?;

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LogError::SubscriberInit(e.to_string()))?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LogError::SubscriberInit(e.to_string()))?;
        }
    }

    Ok(())
}

/// Convert verbosity count to [`LogLevel`].
///
/// Maps CLI verbosity flags (`-v`, `-vv`, `-vvv`) to log levels.
///
/// | Verbosity | Level |
/// |-----------|-------|
/// | 0         | Warn  |
/// | 1         | Info  |
/// | 2         | Debug |
/// | 3+        | Trace |
#[must_use]
pub const fn verbosity_to_level(verbosity: u8) -> LogLevel {
    match verbosity {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

/// Redact sensitive data from logs.
///
/// Key material must never reach the log stream in full. Values shorter
/// than 12 characters are fully redacted to `***`; longer values show the
/// first 4 and last 4 characters with `***` in between.
///
/// # Example
///
/// ```
/// use wampcheck::logging::redact_sensitive;
///
/// assert_eq!(redact_sensitive("9d61b19deffd5a60"), "9d61***5a60");
/// assert_eq!(redact_sensitive("short"), "***");
/// ```
#[must_use]
pub fn redact_sensitive(value: &str) -> String {
    const MIN_LENGTH_FOR_PARTIAL: usize = 12;
    const VISIBLE_CHARS: usize = 4;

    let chars: Vec<char> = value.chars().collect();
    if chars.len() < MIN_LENGTH_FOR_PARTIAL {
        return "***".to_string();
    }

    let prefix: String = chars.iter().take(VISIBLE_CHARS).collect();
    let suffix: String = chars.iter().skip(chars.len() - VISIBLE_CHARS).collect();
    format!("{prefix}***{suffix}")
}
