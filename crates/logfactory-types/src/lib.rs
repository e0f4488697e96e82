//! # logfactory Types
//!
//! Core types, traits, and enums shared across the logfactory crates.
//!
//! This crate provides:
//!
//! - The [`Logger`] and [`LoggerFactory`] traits every backend implements
//! - [`SourceType`], the identifier a logger is scoped to
//! - [`LogLevel`] and the configuration types
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use logfactory_types::{LogLevel, SourceType};
//!
//! let level: LogLevel = "warning".parse().unwrap();
//! assert!(level.allows(LogLevel::Error));
//! assert!(!level.allows(LogLevel::Info));
//!
//! let source = SourceType::of::<String>();
//! assert_eq!(source.short_name(), "String");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{FactoryError, Result};
pub use identifiers::SourceType;
pub use enums::LogLevel;
pub use traits::{FactoryRef, Logger, LoggerFactory, LoggerRef};
pub use config::{Backend, LogFormat, LoggingConfig};
