use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Filter directives, same syntax as `EnvFilter`.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Output format selector (`json` or `text`).
pub const FORMAT_ENV: &str = "BATCHALLOC_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0:?} (expected \"json\" or \"text\")")]
    UnknownLogFormat(String),
}

/// How log lines are rendered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable lines for local runs.
    Text,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" | "plain" => Ok(LogFormat::Text),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => f.write_str("json"),
            LogFormat::Text => f.write_str("text"),
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when the format variable held something unusable; reported once
    /// the subscriber is up.
    pub rejected_format: Option<ConfigError>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `BATCHALLOC_LOG_FORMAT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(filter) = read(FILTER_ENV) {
            config.filter = filter;
        }
        if let Some(raw) = read(FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(e) => config.rejected_format = Some(e),
            }
        }
        config
    }
}
