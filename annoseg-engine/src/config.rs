//! Configuration types for the document parser

use crate::error::{EngineError, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How character annotations are mapped onto tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentPolicy {
    /// Annotation start and end must coincide with token boundaries
    #[default]
    Strict,
    /// Widen to every token the annotation overlaps
    Covering,
}

impl fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentPolicy::Strict => write!(f, "strict"),
            AlignmentPolicy::Covering => write!(f, "covering"),
        }
    }
}

impl FromStr for AlignmentPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(AlignmentPolicy::Strict),
            "covering" => Ok(AlignmentPolicy::Covering),
            other => Err(EngineError::Config(format!(
                "unknown alignment policy '{other}' (expected strict or covering)"
            ))),
        }
    }
}

/// Document parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Entity types to keep (`None` keeps all)
    pub entity_types: Option<HashSet<String>>,
    /// Annotation to token alignment
    pub alignment: AlignmentPolicy,
    /// Strip whitespace at the edges of annotations before alignment
    pub trim_annotations: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            entity_types: None,
            alignment: AlignmentPolicy::Strict,
            trim_annotations: true,
        }
    }
}

impl ParserConfig {
    /// Start building a configuration
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }

    /// Check if annotations of this type pass the entity type filter
    pub fn accepts(&self, kind: &str) -> bool {
        self.entity_types
            .as_ref()
            .map_or(true, |types| types.contains(kind))
    }
}

/// Builder for [`ParserConfig`]
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the given entity types
    pub fn entity_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.entity_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Set the alignment policy
    pub fn alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Enable or disable whitespace trimming of annotations
    pub fn trim_annotations(mut self, trim: bool) -> Self {
        self.config.trim_annotations = trim;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ParserConfig> {
        if let Some(types) = &self.config.entity_types {
            if types.is_empty() {
                return Err(EngineError::Config(
                    "entity type filter is empty; no annotation would be kept".to_string(),
                ));
            }
            if types.iter().any(|kind| kind.trim().is_empty()) {
                return Err(EngineError::Config(
                    "entity type filter contains an empty type".to_string(),
                ));
            }
        }

        Ok(self.config)
    }
}
