//! Conversion statistics

use std::fmt;
use std::ops::AddAssign;

/// Why an annotation did not make it into a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Empty, inverted or whitespace-only
    Empty,
    /// Not contained in a single sentence
    CrossesSentence,
    /// Does not line up with token boundaries
    Misaligned,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Empty => write!(f, "empty annotation"),
            DropReason::CrossesSentence => write!(f, "crosses a sentence boundary"),
            DropReason::Misaligned => write!(f, "does not match token boundaries"),
        }
    }
}

/// Counts collected while converting documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Documents parsed
    pub documents: usize,
    /// Samples (sentences) produced
    pub samples: usize,
    /// Names mapped onto tokens
    pub names: usize,
    /// Annotations removed by the entity type filter
    pub filtered: usize,
    /// Dropped as empty
    pub dropped_empty: usize,
    /// Dropped for crossing a sentence boundary
    pub dropped_crossing: usize,
    /// Dropped for not aligning with tokens
    pub dropped_misaligned: usize,
}

impl ParseReport {
    /// Count one dropped annotation
    pub fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::Empty => self.dropped_empty += 1,
            DropReason::CrossesSentence => self.dropped_crossing += 1,
            DropReason::Misaligned => self.dropped_misaligned += 1,
        }
    }

    /// Total number of dropped annotations
    pub fn dropped(&self) -> usize {
        self.dropped_empty + self.dropped_crossing + self.dropped_misaligned
    }
}

impl AddAssign<&ParseReport> for ParseReport {
    fn add_assign(&mut self, other: &ParseReport) {
        self.documents += other.documents;
        self.samples += other.samples;
        self.names += other.names;
        self.filtered += other.filtered;
        self.dropped_empty += other.dropped_empty;
        self.dropped_crossing += other.dropped_crossing;
        self.dropped_misaligned += other.dropped_misaligned;
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents, {} samples, {} names, {} dropped ({} empty, {} crossing, {} misaligned), {} filtered",
            self.documents,
            self.samples,
            self.names,
            self.dropped(),
            self.dropped_empty,
            self.dropped_crossing,
            self.dropped_misaligned,
            self.filtered
        )
    }
}
