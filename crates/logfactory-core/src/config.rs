//! Logging configuration loading and factory installation.
//!
//! Values are resolved in this priority order:
//! 1. Environment variables (`LOGFACTORY_*`)
//! 2. Values loaded from a YAML file
//! 3. Default values
//!
//! ## Example
//!
//! ```no_run
//! use logfactory_core::config;
//!
//! let settings = config::load_with_env("/etc/myapp/logging.yml")?;
//! config::install(&settings);
//! # Ok::<(), logfactory_types::FactoryError>(())
//! ```

use logfactory_types::{Backend, FactoryError, FactoryRef, LogFormat, LogLevel, LoggingConfig, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::log::TracingLoggerFactory;
use crate::noop::NoOpLoggerFactory;
use crate::registry;
use crate::stdout::StandardOutLoggerFactory;

/// Overrides [`LoggingConfig::backend`].
pub const ENV_BACKEND: &str = "LOGFACTORY_BACKEND";
/// Overrides [`LoggingConfig::level`].
pub const ENV_LEVEL: &str = "LOGFACTORY_LEVEL";
/// Overrides [`LoggingConfig::format`].
pub const ENV_FORMAT: &str = "LOGFACTORY_FORMAT";
/// Overrides [`LoggingConfig::color`]; `auto` clears it.
pub const ENV_COLOR: &str = "LOGFACTORY_COLOR";

/// Load configuration from a YAML file.
///
/// A missing or empty file yields the defaults. Read failures surface as
/// [`FactoryError::Io`], malformed YAML as [`FactoryError::Yaml`].
pub fn load(path: impl AsRef<Path>) -> Result<LoggingConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No logging config at {}, using defaults", path.display());
        return Ok(LoggingConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(LoggingConfig::default());
    }

    Ok(serde_yaml::from_str(&content)?)
}

/// Load configuration from a YAML file, then apply environment overrides.
pub fn load_with_env(path: impl AsRef<Path>) -> Result<LoggingConfig> {
    let mut config = load(path)?;
    apply_env(&mut config)?;
    Ok(config)
}

/// Apply `LOGFACTORY_*` environment overrides.
pub fn apply_env(config: &mut LoggingConfig) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`, keyed by the `ENV_*` names.
///
/// Empty values are ignored.
pub fn apply_overrides<F>(config: &mut LoggingConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(value) = lookup(ENV_BACKEND) {
        config.backend = value.parse::<Backend>()?;
    }
    if let Some(value) = lookup(ENV_LEVEL) {
        config.level = value.parse::<LogLevel>()?;
    }
    if let Some(value) = lookup(ENV_FORMAT) {
        config.format = value.parse::<LogFormat>()?;
    }
    if let Some(value) = lookup(ENV_COLOR) {
        config.color = parse_color(&value)?;
    }

    Ok(())
}

fn parse_color(value: &str) -> Result<Option<bool>> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Ok(None),
        "1" | "true" | "yes" | "on" | "always" => Ok(Some(true)),
        "0" | "false" | "no" | "off" | "never" => Ok(Some(false)),
        _ => Err(FactoryError::Validation(format!("Invalid color setting: {}", value))),
    }
}

/// Build the factory `config` describes.
pub fn build_factory(config: &LoggingConfig) -> FactoryRef {
    match config.backend {
        Backend::Stdout => {
            let mut factory = StandardOutLoggerFactory::new()
                .with_level(config.level)
                .with_format(config.format);
            if let Some(color) = config.color {
                factory = factory.with_color(color);
            }
            Arc::new(factory)
        }
        Backend::Tracing => Arc::new(TracingLoggerFactory::new().with_level(config.level)),
        Backend::Noop => Arc::new(NoOpLoggerFactory),
    }
}

/// Build the factory `config` describes and make it the process default.
pub fn install(config: &LoggingConfig) -> FactoryRef {
    let factory = build_factory(config);
    registry::set_default_factory(FactoryRef::clone(&factory));
    debug!(
        "Installed {} logger factory at level {}",
        config.backend, config.level
    );
    factory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TEST_LOCK;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_missing_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load(temp_dir.path().join("absent.yml")).unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.yml");
        fs::write(&path, "backend: noop\nlevel: ERROR\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.backend, Backend::Noop);
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_yaml_is_yaml_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.yml");
        fs::write(&path, "level: [unterminated").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, FactoryError::Yaml(_)));
    }

    #[test]
    fn test_unknown_level_is_yaml_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.yml");
        fs::write(&path, "level: chatty\n").unwrap();

        assert!(matches!(load(&path).unwrap_err(), FactoryError::Yaml(_)));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, FactoryError::Io(_)));
    }

    #[test]
    fn test_empty_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.yml");
        fs::write(&path, "\n").unwrap();

        assert_eq!(load(&path).unwrap(), LoggingConfig::default());
    }

    #[test]
    fn test_overrides_take_priority() {
        let mut config = LoggingConfig::default();
        let vars = env(&[
            (ENV_BACKEND, "tracing"),
            (ENV_LEVEL, "warning"),
            (ENV_FORMAT, "json"),
            (ENV_COLOR, "off"),
        ]);
        apply_overrides(&mut config, |key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.backend, Backend::Tracing);
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_blank_override_ignored() {
        let mut config = LoggingConfig::default();
        let vars = env(&[(ENV_LEVEL, "  ")]);
        apply_overrides(&mut config, |key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    fn test_bad_override_rejected() {
        let mut config = LoggingConfig::default();
        let vars = env(&[(ENV_COLOR, "sometimes")]);
        let err = apply_overrides(&mut config, |key| vars.get(key).cloned()).unwrap_err();
        assert!(matches!(err, FactoryError::Validation(_)));
    }

    #[test]
    fn test_build_factory_backends() {
        let mut config = LoggingConfig::default();
        assert_eq!(build_factory(&config).backend_name(), "stdout");

        config.backend = Backend::Tracing;
        assert_eq!(build_factory(&config).backend_name(), "tracing");

        config.backend = Backend::Noop;
        assert_eq!(build_factory(&config).backend_name(), "noop");
    }

    #[test]
    fn test_level_reaches_loggers() {
        let config = LoggingConfig {
            level: LogLevel::Warn,
            ..LoggingConfig::default()
        };
        let logger = build_factory(&config).new_instance("cfg", logfactory_types::SourceType::of::<u8>());
        assert_eq!(logger.min_level(), LogLevel::Warn);
    }

    #[test]
    fn test_install_sets_default() {
        let _guard = TEST_LOCK.lock();
        let config = LoggingConfig {
            backend: Backend::Noop,
            ..LoggingConfig::default()
        };

        let factory = install(&config);
        assert!(Arc::ptr_eq(&registry::default_factory(), &factory));
        assert_eq!(registry::default_factory().backend_name(), "noop");
        registry::reset_default_factory();
    }
}
