//! Configuration structures and validation
//!
//! This module defines the TOML schema for language rules used by the
//! rule-based sentence detector.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub closers: Closers,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub exceptions: Exceptions,
    #[serde(default)]
    pub paragraphs: Paragraphs,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence-ending characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
    /// A terminator only ends a sentence when followed by whitespace or
    /// the end of the text
    #[serde(default = "default_true")]
    pub require_whitespace: bool,
}

/// Characters absorbed into a sentence after its terminator (quotes, brackets)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Closers {
    #[serde(default)]
    pub chars: Vec<char>,
}

/// Bracket and quote pairs; terminators inside an open pair never end a sentence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default)]
    pub pairs: Vec<EnclosurePair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: char,
    pub close: char,
}

/// Abbreviations organized by arbitrary category names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Regex patterns suppressing a boundary
///
/// Each pattern is matched against the text window ending right after the
/// terminator; patterns are expected to be anchored with `$`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exceptions {
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Paragraph handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraphs {
    /// A blank line always ends the current sentence
    #[serde(default = "default_true")]
    pub break_on_blank_lines: bool,
}

impl Default for Paragraphs {
    fn default() -> Self {
        Self {
            break_on_blank_lines: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl LanguageConfig {
    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "metadata.code must not be empty".to_string(),
            ));
        }

        if self.terminators.chars.is_empty() {
            return Err(CoreError::InvalidConfig(
                "no terminator characters defined".to_string(),
            ));
        }

        if let Some(ch) = self
            .terminators
            .chars
            .iter()
            .find(|ch| ch.is_whitespace() || self.closers.chars.contains(ch))
        {
            return Err(CoreError::InvalidConfig(format!(
                "terminator {ch:?} is whitespace or also listed as a closer"
            )));
        }

        for pair in &self.enclosures.pairs {
            if pair.open == pair.close {
                return Err(CoreError::InvalidConfig(format!(
                    "enclosure pair {:?} must use distinct open and close characters",
                    pair.open
                )));
            }
            if self.terminators.chars.contains(&pair.open)
                || self.terminators.chars.contains(&pair.close)
            {
                return Err(CoreError::InvalidConfig(format!(
                    "enclosure pair {:?}/{:?} overlaps the terminators",
                    pair.open, pair.close
                )));
            }
        }

        for (category, entries) in &self.abbreviations.categories {
            if entries.iter().any(|abbr| abbr.trim().is_empty()) {
                return Err(CoreError::InvalidConfig(format!(
                    "abbreviation category '{category}' contains an empty entry"
                )));
            }
        }

        for pattern in &self.exceptions.patterns {
            regex::Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "test"
name = "Test Language"

[terminators]
chars = ["."]
"#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = LanguageConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "test");
        assert!(config.terminators.require_whitespace);
        assert!(config.paragraphs.break_on_blank_lines);
        assert!(config.closers.chars.is_empty());
        assert!(config.abbreviations.categories.is_empty());
    }

    #[test]
    fn test_abbreviation_categories_flatten() {
        let source = format!(
            "{MINIMAL}\n[abbreviations]\ntitles = [\"Dr\", \"Mr\"]\nbusiness = [\"Inc\"]\n"
        );
        let config = LanguageConfig::from_toml_str(&source).unwrap();
        assert_eq!(config.abbreviations.categories.len(), 2);
        assert_eq!(config.abbreviations.categories["titles"], vec!["Dr", "Mr"]);
    }

    #[test]
    fn test_empty_code_rejected() {
        let source = MINIMAL.replace("code = \"test\"", "code = \"\"");
        let err = LanguageConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_no_terminators_rejected() {
        let source = MINIMAL.replace("chars = [\".\"]", "chars = []");
        let err = LanguageConfig::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("no terminator"));
    }

    #[test]
    fn test_invalid_exception_regex_rejected() {
        let source = format!("{MINIMAL}\n[exceptions]\npatterns = [\"([A-Z\"]\n");
        let err = LanguageConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPattern { .. }));
    }

    #[test]
    fn test_enclosure_pairs() {
        let source = format!(
            "{MINIMAL}\n[enclosures]\npairs = [{{ open = \"(\", close = \")\" }}]\n"
        );
        let config = LanguageConfig::from_toml_str(&source).unwrap();
        assert_eq!(config.enclosures.pairs.len(), 1);
        assert_eq!(config.enclosures.pairs[0].close, ')');

        let symmetric = format!(
            "{MINIMAL}\n[enclosures]\npairs = [{{ open = \"|\", close = \"|\" }}]\n"
        );
        assert!(LanguageConfig::from_toml_str(&symmetric).is_err());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = LanguageConfig::from_toml_str("[metadata]\ncode = \"x\"\nname = \"x\"\n")
            .unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }
}
