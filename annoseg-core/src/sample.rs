//! Flat name samples: one tokenized sentence with token-index name spans

use crate::span::Span;
use std::fmt;

/// Type used for untyped names when rendering BIO tags
pub const DEFAULT_TYPE: &str = "default";

/// A training-ready sentence for a name finder
///
/// `names` hold token indices (`[start, end)`) into `tokens`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NameSample {
    /// Identifier of the source document
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<String>,
    /// Sentence tokens
    pub tokens: Vec<String>,
    /// Name spans over token indices
    pub names: Vec<Span>,
    /// Set on the first sample of each document
    #[cfg_attr(feature = "serialize", serde(default))]
    pub clear_adaptive_data: bool,
}

impl NameSample {
    /// Create a sample without a document id
    ///
    /// # Panics
    ///
    /// Panics if a name span is empty or reaches past the last token.
    pub fn new(tokens: Vec<String>, names: Vec<Span>) -> Self {
        for name in &names {
            assert!(
                name.start < name.end && name.end <= tokens.len(),
                "name span {name} is outside of {} tokens",
                tokens.len()
            );
        }
        Self {
            id: None,
            tokens,
            names,
            clear_adaptive_data: false,
        }
    }

    /// Set the document id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark this sample as the start of a new document
    pub fn with_clear_adaptive_data(mut self, clear: bool) -> Self {
        self.clear_adaptive_data = clear;
        self
    }

    /// Tokens covered by a name span
    pub fn name_tokens(&self, name: &Span) -> &[String] {
        &self.tokens[name.start..name.end]
    }

    /// True if any two names share a token
    pub fn has_overlapping_names(&self) -> bool {
        let mut sorted: Vec<&Span> = self.names.iter().collect();
        sorted.sort_by_key(|span| (span.start, span.end));
        sorted.windows(2).any(|pair| pair[0].intersects(pair[1]))
    }

    /// Names that can be rendered in a flat (non-nested) encoding
    ///
    /// Names are ordered by start index; a name overlapping one already
    /// kept is skipped.
    pub fn flat_names(&self) -> Vec<&Span> {
        let mut sorted: Vec<&Span> = self.names.iter().collect();
        sorted.sort_by_key(|span| (span.start, std::cmp::Reverse(span.end)));

        let mut kept: Vec<&Span> = Vec::with_capacity(sorted.len());
        for name in sorted {
            if kept.last().map_or(true, |last| last.end <= name.start) {
                kept.push(name);
            }
        }
        kept
    }

    /// BIO tag per token (`B-TYPE`, `I-TYPE`, `O`)
    pub fn bio_tags(&self) -> Vec<String> {
        let mut tags = vec!["O".to_string(); self.tokens.len()];
        for name in self.flat_names() {
            let kind = name.kind.as_deref().unwrap_or(DEFAULT_TYPE);
            tags[name.start] = format!("B-{kind}");
            for tag in &mut tags[name.start + 1..name.end] {
                *tag = format!("I-{kind}");
            }
        }
        tags
    }
}

/// Renders the name-finder training format:
/// `<START:person> John <END> lives in <START:location> Paris <END> .`
impl fmt::Display for NameSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flat_names();
        let mut next_name = names.iter().peekable();
        let mut open_end: Option<usize> = None;

        for (index, token) in self.tokens.iter().enumerate() {
            if open_end == Some(index) {
                f.write_str("<END> ")?;
                open_end = None;
            }
            if let Some(name) = next_name.next_if(|name| name.start == index) {
                match &name.kind {
                    Some(kind) => write!(f, "<START:{kind}> ")?,
                    None => f.write_str("<START> ")?,
                }
                open_end = Some(name.end);
            }
            f.write_str(token)?;
            if index + 1 < self.tokens.len() {
                f.write_str(" ")?;
            }
        }
        if open_end.is_some() {
            f.write_str(" <END>")?;
        }
        Ok(())
    }
}
