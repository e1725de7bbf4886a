//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building segmenters and language rules
#[derive(Error, Debug)]
pub enum CoreError {
    /// Language configuration file could not be read
    #[error("failed to read language configuration {path}: {source}")]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Language configuration is not valid TOML for the schema
    #[error("failed to parse language configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Language configuration parsed but failed validation
    #[error("invalid language configuration: {0}")]
    InvalidConfig(String),

    /// Exception pattern is not a valid regular expression
    #[error("invalid exception pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },

    /// No built-in rules for the requested language
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = CoreError::InvalidConfig("metadata.code must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "invalid language configuration: metadata.code must not be empty"
        );
    }

    #[test]
    fn test_unsupported_language_display() {
        let error = CoreError::UnsupportedLanguage("klingon".to_string());
        assert_eq!(error.to_string(), "language 'klingon' not supported");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let error = CoreError::Io {
            path: PathBuf::from("/missing/rules.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = error.to_string();
        assert!(message.contains("/missing/rules.toml"));
        assert!(message.contains("no such file"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
