//! Runtime implementation of language rules
//!
//! Bridges the TOML configuration and the hot-path lookups used by the
//! sentence detector.

use crate::error::{CoreError, Result};
use crate::language::{
    config::LanguageConfig,
    tables::{classify_dot, CharTable, DotRole, Trie},
};
use regex::Regex;
use std::path::Path;

/// Bytes of context given to exception patterns
const EXCEPTION_WINDOW: usize = 64;

/// Decision about a potential boundary at a terminator
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoundaryDecision {
    /// The terminator may end a sentence
    Accept,
    /// Not a boundary (decimal point, abbreviation, exception)
    Reject,
}

/// Role of a character in a bracket or quote pair
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EnclosureRole {
    /// Opens a pair
    Open,
    /// Closes a pair
    Close,
}

/// Language rules compiled from a [`LanguageConfig`]
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    terminators: CharTable,
    closers: CharTable,
    openers: CharTable,
    enclosure_closers: CharTable,
    abbreviations: Trie,
    exceptions: Vec<Regex>,
    require_whitespace: bool,
    break_on_blank_lines: bool,
}

impl LanguageRules {
    /// Compile rules from a validated configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let exceptions = config
            .exceptions
            .patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: CharTable::new(config.terminators.chars.iter().copied()),
            closers: CharTable::new(config.closers.chars.iter().copied()),
            openers: CharTable::new(config.enclosures.pairs.iter().map(|pair| pair.open)),
            enclosure_closers: CharTable::new(
                config.enclosures.pairs.iter().map(|pair| pair.close),
            ),
            abbreviations: Trie::from_categories(
                config.abbreviations.categories.values().flatten(),
                false,
            ),
            exceptions,
            require_whitespace: config.terminators.require_whitespace,
            break_on_blank_lines: config.paragraphs.break_on_blank_lines,
        })
    }

    /// Parse and compile rules from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_config(&LanguageConfig::from_toml_str(source)?)
    }

    /// Load rules from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Language code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the character may end a sentence
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(ch)
    }

    /// Check if the character is absorbed after a terminator
    #[inline]
    pub fn is_closer(&self, ch: char) -> bool {
        self.closers.contains(ch)
    }

    /// Role of the character in an enclosure pair, if any
    #[inline]
    pub fn enclosure(&self, ch: char) -> Option<EnclosureRole> {
        if self.openers.contains(ch) {
            Some(EnclosureRole::Open)
        } else if self.enclosure_closers.contains(ch) {
            Some(EnclosureRole::Close)
        } else {
            None
        }
    }

    /// Terminators only count when followed by whitespace or end of text
    pub fn requires_whitespace(&self) -> bool {
        self.require_whitespace
    }

    /// Blank lines end the current sentence
    pub fn breaks_on_blank_lines(&self) -> bool {
        self.break_on_blank_lines
    }

    /// True if the word before the dot at `dot_pos` is an abbreviation
    pub fn is_abbreviation(&self, text: &str, dot_pos: usize) -> bool {
        self.abbreviations.matches_before(text, dot_pos)
    }

    /// Decide whether the terminator at byte `pos` can end a sentence
    ///
    /// `prev` and `next` are the characters around the terminator.
    pub fn boundary_decision(
        &self,
        text: &str,
        pos: usize,
        terminator: char,
        prev: Option<char>,
        next: Option<char>,
    ) -> BoundaryDecision {
        if terminator == '.' {
            match classify_dot(prev, next) {
                DotRole::Decimal => return BoundaryDecision::Reject,
                DotRole::Ellipsis | DotRole::Ordinary => {}
            }
            if prev != Some('.') && self.is_abbreviation(text, pos) {
                return BoundaryDecision::Reject;
            }
        }

        if self.matches_exception(text, pos + terminator.len_utf8()) {
            return BoundaryDecision::Reject;
        }

        BoundaryDecision::Accept
    }

    /// True if an exception pattern matches the window ending at `end`
    fn matches_exception(&self, text: &str, end: usize) -> bool {
        if self.exceptions.is_empty() {
            return false;
        }

        let mut start = end.saturating_sub(EXCEPTION_WINDOW);
        while !text.is_char_boundary(start) {
            start -= 1;
        }
        let window = &text[start..end];
        self.exceptions.iter().any(|re| re.is_match(window))
    }
}
