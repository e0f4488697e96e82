//! # logfactory Core
//!
//! The process-wide default logger factory and the bundled backends.
//!
//! This crate provides:
//!
//! - **Registry**: the shared default-factory slot and the lookup functions
//!   delegating to it
//! - **Standard out**: the backend used when nothing else is configured
//! - **Tracing**: a backend forwarding to `tracing`, plus subscriber setup
//! - **No-op**: a backend that discards everything
//! - **Configuration**: YAML and environment driven factory selection
//!
//! ## Example
//!
//! ```
//! use logfactory_core::{get_logger, set_default_factory, Logger, NoOpLoggerFactory};
//! use std::sync::Arc;
//!
//! struct Server;
//!
//! set_default_factory(Arc::new(NoOpLoggerFactory));
//! let logger = get_logger::<Server>();
//! logger.info("listening");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod noop;
pub mod registry;
pub mod stdout;
pub mod term;

// Re-export commonly used items
pub use log::{TracingLogger, TracingLoggerFactory};
pub use noop::{NoOpLogger, NoOpLoggerFactory};
pub use registry::{
    default_factory, default_factory_is_set, get_instance, get_logger, get_named_instance,
    set_default_factory, try_set_default_factory, FactorySlot, LoggingFactory,
};
pub use stdout::{StandardOutLogger, StandardOutLoggerFactory};
pub use logfactory_types::{FactoryError, FactoryRef, LogLevel, Logger, LoggerFactory, LoggerRef, Result, SourceType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
