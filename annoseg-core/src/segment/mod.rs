//! Sentence and token segmentation
//!
//! Both capabilities report byte spans into the text they were given.
//! Implementations must be `Send + Sync` so one parser can be shared
//! across threads.

use crate::span::Span;
use std::sync::Arc;

pub mod sentence;
pub mod tokenizer;

pub use sentence::RuleSentenceDetector;
pub use tokenizer::{SimpleTokenizer, WhitespaceTokenizer};

/// Splits raw text into sentences
pub trait SentenceDetector: Send + Sync {
    /// Ordered, non-overlapping sentence spans (byte offsets into `text`)
    ///
    /// Spans should not start or end with whitespace. Text consisting only
    /// of whitespace yields no spans.
    fn sent_pos_detect(&self, text: &str) -> Vec<Span>;

    /// Sentence strings
    fn sent_detect<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sent_pos_detect(text)
            .iter()
            .map(|span| span.covered_text(text))
            .collect()
    }
}

/// Splits a sentence into tokens
pub trait Tokenizer: Send + Sync {
    /// Ordered, non-overlapping token spans (byte offsets into `text`)
    fn tokenize_pos(&self, text: &str) -> Vec<Span>;

    /// Token strings
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_pos(text)
            .iter()
            .map(|span| span.covered_text(text).to_string())
            .collect()
    }
}

impl<S: SentenceDetector + ?Sized> SentenceDetector for Arc<S> {
    fn sent_pos_detect(&self, text: &str) -> Vec<Span> {
        (**self).sent_pos_detect(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn tokenize_pos(&self, text: &str) -> Vec<Span> {
        (**self).tokenize_pos(text)
    }
}

/// Push `text[start..end]` as a span after trimming whitespace, unless empty
pub(crate) fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<Span>) {
    if start >= end {
        return;
    }
    let trimmed = Span::new(start, end).trim(text);
    if !trimmed.is_empty() {
        spans.push(trimmed);
    }
}
