//! Core trait definitions for logfactory abstractions.

use std::error::Error as StdError;
use std::sync::Arc;
use crate::{LogLevel, SourceType};

/// Shared handle to a logger instance.
pub type LoggerRef = Arc<dyn Logger>;

/// Shared handle to a logger factory.
pub type FactoryRef = Arc<dyn LoggerFactory>;

/// A named logger bound to the type that requested it.
///
/// Implementers only provide [`Logger::log`] and the accessors; the
/// per-level helpers are derived from them.
pub trait Logger: Send + Sync {
    /// Name the logger was created with.
    fn name(&self) -> &str;

    /// Type the logger was created for.
    fn source(&self) -> SourceType;

    /// Most verbose level this logger emits.
    fn min_level(&self) -> LogLevel;

    /// Emit `message` at `level`.
    ///
    /// Implementations drop messages their threshold rejects and must not
    /// fail the caller when the underlying sink does.
    fn log(&self, level: LogLevel, message: &str);

    /// Whether a message at `level` would be emitted.
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.min_level().allows(level)
    }

    /// Log at trace level.
    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    /// Log at debug level.
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at info level.
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log at warn level.
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at error level.
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log at error level with `err` and its source chain appended.
    fn error_with(&self, err: &dyn StdError, message: &str) {
        if !self.is_enabled(LogLevel::Error) {
            return;
        }
        self.log(LogLevel::Error, &format_error_chain(message, err));
    }
}

/// Produces loggers scoped to a name and a source type.
///
/// Whether repeated calls with the same arguments return the same instance
/// is up to the implementation.
pub trait LoggerFactory: Send + Sync {
    /// Create (or look up) the logger for `name` and `source`.
    fn new_instance(&self, name: &str, source: SourceType) -> LoggerRef;

    /// Short label for diagnostics, e.g. "stdout" or "tracing".
    fn backend_name(&self) -> &'static str {
        "custom"
    }
}

/// Render `message: err: cause: ...` following `Error::source`.
pub fn format_error_chain(message: &str, err: &dyn StdError) -> String {
    let mut out = format!("{}: {}", message, err);
    let mut cause = err.source();
    while let Some(inner) = cause {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        cause = inner.source();
    }
    out
}
