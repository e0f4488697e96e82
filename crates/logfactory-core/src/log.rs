//! Bridge to the `tracing` ecosystem.
//!
//! [`TracingLoggerFactory`] turns every logger call into a `tracing` event
//! carrying the logger name and source type as fields, so applications that
//! already run a subscriber get facade output in the same stream.

use logfactory_types::{FactoryError, LogFormat, LogLevel, Logger, LoggerFactory, LoggerRef, Result, SourceType};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber with default configuration.
///
/// Honours `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init_default() -> Result<()> {
    init_with_filter(DEFAULT_FILTER, LogFormat::Pretty)
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
///
/// # Errors
///
/// Fails if the filter does not parse or a global subscriber is already
/// installed.
pub fn init_with_filter(default_filter: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| FactoryError::Config(format!("Invalid log filter '{}': {}", default_filter, e)))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact().with_target(false)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    installed.map_err(|e| FactoryError::Config(format!("Failed to install tracing subscriber: {}", e)))
}

/// Factory for [`TracingLogger`] instances.
#[derive(Debug, Clone, Copy)]
pub struct TracingLoggerFactory {
    min_level: LogLevel,
}

impl TracingLoggerFactory {
    /// Factory that forwards every level and leaves filtering to the subscriber.
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
        }
    }

    /// Drop messages more verbose than `level` before they reach `tracing`.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }
}

impl Default for TracingLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn new_instance(&self, name: &str, source: SourceType) -> LoggerRef {
        Arc::new(TracingLogger {
            name: name.to_string(),
            source,
            min_level: self.min_level,
        })
    }

    fn backend_name(&self) -> &'static str {
        "tracing"
    }
}

/// A logger emitting `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
    source: SourceType,
    min_level: LogLevel,
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> SourceType {
        self.source
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let name = self.name.as_str();
        let source = self.source.full_name();
        match level {
            LogLevel::Error => tracing::error!(logger = name, source, "{}", message),
            LogLevel::Warn => tracing::warn!(logger = name, source, "{}", message),
            LogLevel::Info => tracing::info!(logger = name, source, "{}", message),
            LogLevel::Debug => tracing::debug!(logger = name, source, "{}", message),
            LogLevel::Trace => tracing::trace!(logger = name, source, "{}", message),
            LogLevel::None => {}
        }
    }
}
