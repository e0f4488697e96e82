//! Logger factory writing plain lines to standard output.

use chrono::{SecondsFormat, Utc};
use logfactory_types::{LogFormat, LogLevel, Logger, LoggerFactory, LoggerRef, SourceType};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::warn;

use crate::term;

/// Shared output behind every logger a factory hands out.
struct Sink {
    writer: Mutex<Box<dyn Write + Send>>,
    failed: AtomicBool,
}

impl Sink {
    fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            failed: AtomicBool::new(false),
        }
    }

    fn write_line(&self, line: &str) {
        let result = {
            let mut writer = self.writer.lock();
            writeln!(writer, "{}", line).and_then(|_| writer.flush())
        };

        // Only the first failure is reported; logging never fails the caller.
        if let Err(e) = result {
            if !self.failed.swap(true, Ordering::Relaxed) {
                warn!("Standard out logger failed to write: {}", e);
            }
        }
    }
}

/// Factory for [`StandardOutLogger`] instances.
///
/// All loggers from one factory share its writer, so lines from concurrent
/// threads never interleave.
#[derive(Clone)]
pub struct StandardOutLoggerFactory {
    min_level: LogLevel,
    format: LogFormat,
    color: bool,
    sink: Arc<Sink>,
}

impl StandardOutLoggerFactory {
    /// Factory writing to the process's stdout at debug level.
    ///
    /// Colours are enabled when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            format: LogFormat::Pretty,
            color: term::in_controlling_terminal(),
            sink: Arc::new(Sink::new(Box::new(io::stdout()))),
        }
    }

    /// Factory writing to `writer` instead of stdout, without colours.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            min_level: LogLevel::Debug,
            format: LogFormat::Pretty,
            color: false,
            sink: Arc::new(Sink::new(Box::new(writer))),
        }
    }

    /// Set the most verbose level emitted.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the line format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Force colours on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Most verbose level emitted.
    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    /// Line format.
    pub fn format(&self) -> LogFormat {
        self.format
    }
}

impl Default for StandardOutLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for StandardOutLoggerFactory {
    fn new_instance(&self, name: &str, source: SourceType) -> LoggerRef {
        Arc::new(StandardOutLogger {
            name: name.to_string(),
            source,
            min_level: self.min_level,
            format: self.format,
            color: self.color,
            sink: Arc::clone(&self.sink),
        })
    }

    fn backend_name(&self) -> &'static str {
        "stdout"
    }
}

/// A logger writing one line per message.
pub struct StandardOutLogger {
    name: String,
    source: SourceType,
    min_level: LogLevel,
    format: LogFormat,
    color: bool,
    sink: Arc<Sink>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: &'a str,
    level: LogLevel,
    logger: &'a str,
    source: &'a str,
    thread: &'a str,
    message: &'a str,
}

impl StandardOutLogger {
    fn render(&self, level: LogLevel, message: &str) -> Option<String> {
        match self.format {
            LogFormat::Pretty => Some(format!(
                "[{}][Thread {}][{}] [{}] {}",
                timestamp(),
                thread_label(),
                term::paint_level(level, self.color),
                self.name,
                message
            )),
            LogFormat::Compact => Some(format!(
                "{} {}: {}",
                term::paint_level(level, self.color),
                self.source.short_name(),
                message
            )),
            LogFormat::Json => {
                let timestamp = timestamp();
                let thread = thread_label();
                let record = JsonRecord {
                    timestamp: &timestamp,
                    level,
                    logger: &self.name,
                    source: self.source.full_name(),
                    thread: &thread,
                    message,
                };
                match serde_json::to_string(&record) {
                    Ok(line) => Some(line),
                    Err(e) => {
                        warn!("Failed to encode log record: {}", e);
                        None
                    }
                }
            }
        }
    }
}

impl Logger for StandardOutLogger {
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
        if let Some(line) = self.render(level, message) {
            self.sink.write_line(&line);
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn thread_label() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}
