//! Half-open spans with an optional type label
//!
//! The same type is used in three coordinate systems: byte offsets into a
//! document (sentences), byte offsets into a sentence (tokens) and token
//! indices (names inside a [`NameSample`](crate::NameSample)).

use std::fmt;

/// A half-open interval `[start, end)` with an optional type label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Span {
    /// Inclusive start
    pub start: usize,
    /// Exclusive end
    pub end: usize,
    /// Type label, e.g. `PERSON`
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<String>,
}

impl Span {
    /// Create an untyped span
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {start} is after end {end}");
        Self {
            start,
            end,
            kind: None,
        }
    }

    /// Create a typed span
    pub fn typed(start: usize, end: usize, kind: impl Into<String>) -> Self {
        Self::new(start, end).with_kind(kind)
    }

    /// Attach a type label
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Number of units covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if `other` lies entirely inside this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True if the spans share at least one unit
    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if the spans intersect but neither contains the other
    pub fn crosses(&self, other: &Span) -> bool {
        self.intersects(other) && !self.contains(other) && !other.contains(self)
    }

    /// Slice of `text` covered by this span (byte offsets)
    pub fn covered_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Shrink the span so it neither starts nor ends with whitespace
    ///
    /// Interprets the span as byte offsets into `text`. A whitespace-only
    /// span collapses to an empty span at its original start.
    pub fn trim(&self, text: &str) -> Span {
        let covered = self.covered_text(text);
        let leading = covered.len() - covered.trim_start().len();
        let trimmed = covered.trim();
        if trimmed.is_empty() {
            return Span {
                start: self.start,
                end: self.start,
                kind: self.kind.clone(),
            };
        }
        let start = self.start + leading;
        Span {
            start,
            end: start + trimmed.len(),
            kind: self.kind.clone(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)?;
        if let Some(kind) = &self.kind {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}
