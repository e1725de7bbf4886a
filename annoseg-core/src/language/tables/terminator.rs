//! Character set lookup with O(1) ASCII fast path
//!
//! Used for terminators and closing punctuation.

use std::collections::HashSet;

/// Fast character membership table
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members
    non_ascii: HashSet<char>,
}

impl CharTable {
    /// Create from a list of characters
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// Role of a `.` given its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotRole {
    /// Plain full stop (abbreviation check happens elsewhere)
    Ordinary,
    /// Decimal point: `3.14`
    Decimal,
    /// Part of a run of dots: `...`
    Ellipsis,
}

/// Classify a dot based on the characters around it
#[inline]
pub fn classify_dot(prev: Option<char>, next: Option<char>) -> DotRole {
    if let (Some(p), Some(n)) = (prev, next) {
        if p.is_ascii_digit() && n.is_ascii_digit() {
            return DotRole::Decimal;
        }
    }

    if prev == Some('.') || next == Some('.') {
        return DotRole::Ellipsis;
    }

    DotRole::Ordinary
}
