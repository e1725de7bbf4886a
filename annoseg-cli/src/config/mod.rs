//! Configuration module
//!
//! Optional TOML file supplying defaults for `convert`; command-line flags
//! take precedence.
//!
//! ```toml
//! [processing]
//! language = "english"
//! tokenizer = "simple"
//! alignment = "strict"
//! types = ["PERSON", "LOCATION"]
//! merge_fragments = false
//!
//! [output]
//! format = "opennlp"
//! pretty_json = false
//! ```

use crate::commands::convert::{Alignment, Language, TokenizerKind};
use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Built-in language rules
    pub language: Option<Language>,

    /// Tokenizer splitting sentences
    pub tokenizer: Option<TokenizerKind>,

    /// Annotation to token alignment
    pub alignment: Option<Alignment>,

    /// Entity types to keep (empty keeps all)
    pub types: Vec<String>,

    /// Keep discontinuous annotations as their overall extent
    pub merge_fragments: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: Option<OutputFormat>,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
