//! Language source management for CLI

use crate::commands::convert::Language;
use annoseg_core::{get_rules, LanguageRules};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of language rules
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Built-in language
    BuiltIn(Language),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the rules
    pub fn load(&self) -> Result<Arc<LanguageRules>> {
        match self {
            LanguageSource::BuiltIn(lang) => get_rules(lang.code())
                .with_context(|| format!("Failed to load {} rules", lang.as_str())),
            LanguageSource::External { path } => LanguageRules::from_file(path)
                .map(Arc::new)
                .with_context(|| format!("Failed to load language config {}", path.display())),
        }
    }
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_built_in() {
        let source = LanguageSource::BuiltIn(Language::Japanese);
        assert_eq!(source.display_name(), "Built-in: Japanese");
        assert_eq!(source.load().unwrap().code(), "ja");
    }

    #[test]
    fn test_external() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[metadata]\ncode = \"xx\"\nname = \"Test\"\n\n[terminators]\nchars = [\".\"]\n"
        )
        .unwrap();

        let source = LanguageSource::External {
            path: file.path().to_path_buf(),
        };
        assert!(source.display_name().starts_with("External: "));
        assert_eq!(source.load().unwrap().name(), "Test");
    }

    #[test]
    fn test_external_missing_file() {
        let source = LanguageSource::External {
            path: PathBuf::from("/nonexistent/rules.toml"),
        };
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.toml"));
    }
}
