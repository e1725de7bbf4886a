//! Character-class and whitespace tokenizers

use super::Tokenizer;
use crate::span::Span;

/// Character class used to find token boundaries
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum CharClass {
    Space,
    Alpha,
    Digit,
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Space
        } else if ch.is_alphabetic() {
            CharClass::Alpha
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Tokenizer splitting on character class changes
///
/// Runs of letters and runs of digits form tokens; every other non-space
/// character (punctuation, symbols) is a token of its own. With
/// [`with_alphanumeric_tokens`](Self::with_alphanumeric_tokens) letters and
/// digits are kept together, so `COVID19` stays one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer {
    alphanumeric: bool,
}

impl SimpleTokenizer {
    /// Create a tokenizer that splits letters from digits
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep mixed letter and digit runs (`COVID19`) as one token
    pub fn with_alphanumeric_tokens(mut self, enabled: bool) -> Self {
        self.alphanumeric = enabled;
        self
    }

    fn same_token(&self, current: CharClass, next: CharClass) -> bool {
        match (current, next) {
            (CharClass::Other, _) | (_, CharClass::Other) => false,
            (a, b) if a == b => true,
            (CharClass::Alpha, CharClass::Digit) | (CharClass::Digit, CharClass::Alpha) => {
                self.alphanumeric
            }
            _ => false,
        }
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize_pos(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut current: Option<(usize, CharClass)> = None;

        for (pos, ch) in text.char_indices() {
            let class = CharClass::of(ch);

            if let Some((start, prev)) = current {
                if class != CharClass::Space && self.same_token(prev, class) {
                    continue;
                }
                spans.push(Span::new(start, pos));
                current = None;
            }

            if class != CharClass::Space {
                current = Some((pos, class));
            }
        }

        if let Some((start, _)) = current {
            spans.push(Span::new(start, text.len()));
        }
        spans
    }
}

/// Tokenizer splitting on whitespace only
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize_pos(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut start = None;

        for (pos, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    spans.push(Span::new(s, pos));
                    start = None;
                }
                (false, None) => start = Some(pos),
                _ => {}
            }
        }

        if let Some(s) = start {
            spans.push(Span::new(s, text.len()));
        }
        spans
    }
}
