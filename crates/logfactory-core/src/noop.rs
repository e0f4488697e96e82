//! Logger factory that discards everything.

use logfactory_types::{LogLevel, Logger, LoggerFactory, LoggerRef, SourceType};
use std::sync::Arc;

/// Factory for [`NoOpLogger`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLoggerFactory;

impl LoggerFactory for NoOpLoggerFactory {
    fn new_instance(&self, name: &str, source: SourceType) -> LoggerRef {
        Arc::new(NoOpLogger {
            name: name.to_string(),
            source,
        })
    }

    fn backend_name(&self) -> &'static str {
        "noop"
    }
}

/// A logger with every level disabled.
#[derive(Debug, Clone)]
pub struct NoOpLogger {
    name: String,
    source: SourceType,
}

impl Logger for NoOpLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> SourceType {
        self.source
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::None
    }

    fn log(&self, _level: LogLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_disables_everything() {
        let logger = NoOpLoggerFactory.new_instance("silent", SourceType::of::<u8>());
        assert_eq!(logger.name(), "silent");
        for level in LogLevel::ALL {
            assert!(!logger.is_enabled(level));
        }
        logger.error("nowhere");
    }
}
