//! Layered error types

use annoseg_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// A document that cannot be converted into samples
///
/// Recoverable annotation problems (misaligned or boundary-crossing names)
/// are not errors; they are dropped, logged and counted in a
/// [`ParseReport`](crate::ParseReport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Annotation offsets lie outside the document text
    #[error(
        "annotation {annotation} in document {document} ends at character {end}, \
         beyond the text length {len}"
    )]
    AnnotationOutOfBounds {
        /// Document identifier
        document: String,
        /// Annotation identifier
        annotation: String,
        /// Offending end offset (characters)
        end: usize,
        /// Text length (characters)
        len: usize,
    },

    /// A segmenter returned spans that are unordered, overlapping or out of range
    #[error("inconsistent {segmenter} output for document {document}: {reason}")]
    InconsistentSegmentation {
        /// Document identifier
        document: String,
        /// Which segmenter misbehaved
        segmenter: &'static str,
        /// What was wrong with its output
        reason: String,
    },
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Document could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Segmenter or language rule error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Reading a corpus file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed annotation file
    #[error("{path}:{line}: {reason}")]
    Format {
        /// Annotation file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What could not be parsed
        reason: String,
    },

    /// Invalid parser or stream configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::AnnotationOutOfBounds {
            document: "doc-1".to_string(),
            annotation: "T4".to_string(),
            end: 120,
            len: 80,
        };
        let message = err.to_string();
        assert!(message.contains("T4"));
        assert!(message.contains("doc-1"));
        assert!(message.contains("120"));
    }

    #[test]
    fn test_conversions() {
        let parse = ParseError::InconsistentSegmentation {
            document: "d".to_string(),
            segmenter: "tokenizer",
            reason: "span 3..2 is empty".to_string(),
        };
        let err: EngineError = parse.clone().into();
        assert!(matches!(err, EngineError::Parse(ref inner) if *inner == parse));

        let core: EngineError = CoreError::UnsupportedLanguage("xx".to_string()).into();
        assert!(core.to_string().contains("xx"));
    }

    #[test]
    fn test_format_error_location() {
        let err = EngineError::Format {
            path: PathBuf::from("corpus/a.ann"),
            line: 7,
            reason: "missing offsets".to_string(),
        };
        assert_eq!(err.to_string(), "corpus/a.ann:7: missing offsets");
    }
}
