//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No corpus found for the given inputs
    NoInput(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Conversion stopped on a document error
    ConversionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput(inputs) => write!(f, "No brat corpus found for: {inputs}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ConversionError(msg) => write!(f, "Conversion error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::NoInput("corpus/".to_string()).to_string(),
            "No brat corpus found for: corpus/"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("unknown field".to_string()).to_string(),
            "Configuration error: unknown field"
        );
        assert_eq!(
            CliError::ConversionError("doc-3: out of bounds".to_string()).to_string(),
            "Conversion error: doc-3: out of bounds"
        );
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::NoInput("x".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_unicode_paths() {
        let error = CliError::NoInput("コーパス/文書".to_string());
        assert_eq!(error.to_string(), "No brat corpus found for: コーパス/文書");
    }
}
