//! Error types for logfactory operations.

use thiserror::Error;

/// The main error type for logfactory operations.
///
/// The facade itself only ever raises [`FactoryError::Precondition`]; the
/// remaining variants come from configuration loading.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// A caller broke an operation's precondition (e.g. an absent factory)
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for logfactory operations.
pub type Result<T> = std::result::Result<T, FactoryError>;

/// Helper macro to bail out with a FactoryError
///
/// # Example
///
/// ```ignore
/// if factory.is_none() {
///     bail!(Precondition, "default factory must not be absent");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::FactoryError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::FactoryError::$variant(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(value: Option<u32>) -> Result<u32> {
        match value {
            Some(v) => Ok(v),
            None => bail!(Precondition, "value must not be absent"),
        }
    }

    #[test]
    fn test_bail_variant() {
        let err = reject(None).unwrap_err();
        assert!(matches!(err, FactoryError::Precondition(_)));
        assert_eq!(err.to_string(), "Precondition violated: value must not be absent");
        assert_eq!(reject(Some(3)).unwrap(), 3);
    }

    #[test]
    fn test_yaml_conversion() {
        let yaml = serde_yaml::from_str::<u32>("[1, 2").unwrap_err();
        let err: FactoryError = yaml.into();
        assert!(err.to_string().starts_with("YAML parsing error"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FactoryError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
