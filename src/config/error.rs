//! Configuration error types for the config module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more validation rules failed on a resolved configuration
    #[error("Invalid configuration: {}", .0.join(","))]
    Invalid(Vec<String>),

    /// Config file not found at expected path
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Underlying I/O failure, passed through as-is
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Environment variable parse error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse { var: String, message: String },

    /// A configuration value that cannot be carried in an HTTP header
    #[error("Invalid value for header '{name}': {message}")]
    InvalidHeader { name: String, message: String },
}

impl ConfigError {
    /// Create an env parse error
    pub fn env_parse<V: Into<String>, M: Into<String>>(var: V, message: M) -> Self {
        Self::EnvParse {
            var: var.into(),
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header<N: Into<String>, M: ToString>(name: N, message: M) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }

    /// Validation messages carried by an `Invalid` error, empty otherwise.
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
