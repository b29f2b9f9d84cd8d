//! Error types for Rubopop

use crate::config::ValueType;
use std::io;
use thiserror::Error;

/// Result type alias for Rubopop operations
pub type Result<T> = std::result::Result<T, RubopopError>;

/// Main error type for Rubopop
#[derive(Error, Debug)]
pub enum RubopopError {
    /// Command-line usage errors
    #[error("{0}")]
    Options(#[from] OptionsError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML serialization errors
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while turning command-line tokens into a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("flag '{0}' requires a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for '{flag}': expected {expected}")]
    TypeCoercion {
        flag: String,
        value: String,
        expected: ValueType,
    },

    #[error("option '{option}' does not hold a {expected} value")]
    TypeMismatch {
        option: &'static str,
        expected: ValueType,
    },

    #[error("{0}")]
    Usage(String),
}

/// Specialized result type for option parsing
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

impl RubopopError {
    /// Whether the error came from bad command-line input
    pub fn is_usage_error(&self) -> bool {
        matches!(self, RubopopError::Options(_))
    }
}
