//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{FactoryError, Result};
use crate::LogLevel;

/// Logging configuration.
///
/// Every field has a default, so an empty document is a valid config that
/// selects the standard-output backend at debug level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Which bundled factory to install
    #[serde(default)]
    pub backend: Backend,
    /// Most verbose level emitted
    #[serde(default)]
    pub level: LogLevel,
    /// Line format for the standard-output backend
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Force colours on or off; detected from the terminal when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            level: LogLevel::default(),
            format: default_log_format(),
            color: None,
        }
    }
}

/// Bundled logger factory backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Plain lines on standard output
    #[default]
    Stdout,
    /// Events forwarded to the `tracing` subscriber
    Tracing,
    /// Everything discarded
    Noop,
}

impl FromStr for Backend {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stdout" | "console" => Ok(Backend::Stdout),
            "tracing" => Ok(Backend::Tracing),
            "noop" | "none" => Ok(Backend::Noop),
            _ => Err(FactoryError::Validation(format!("Invalid logging backend: {}", s))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Stdout => write!(f, "stdout"),
            Backend::Tracing => write!(f, "tracing"),
            Backend::Noop => write!(f, "noop"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

impl FromStr for LogFormat {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(FactoryError::Validation(format!("Invalid log format: {}", s))),
        }
    }
}
