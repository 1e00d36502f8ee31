//! Error types for the Al-Noor core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Content file could not be decoded into the site data model.
    #[error("Content error in {path}: {message}")]
    Content { path: PathBuf, message: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new content error.
    pub fn content(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Content {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_content_error() {
        let err = CoreError::content("content.toml", "unsupported extension");
        assert!(err.to_string().contains("Content error"));
        assert!(err.to_string().contains("content.toml"));
        assert!(err.to_string().contains("unsupported extension"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io_err = std::io::Error::other("disk on fire");
        let err = CoreError::config_with_source("could not read", io_err);
        let source = std::error::Error::source(&err).expect("source attached");
        assert!(source.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
