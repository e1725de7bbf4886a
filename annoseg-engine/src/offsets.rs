//! Character to byte offset conversion
//!
//! Annotations count characters while segmenters report byte spans.

/// Lookup table from character offsets to byte offsets for one text
#[derive(Debug, Clone)]
pub struct OffsetMap {
    /// Byte offset of every character plus the text length; empty for ASCII
    byte_offsets: Vec<usize>,
    len: usize,
}

impl OffsetMap {
    /// Build the table for `text`
    pub fn new(text: &str) -> Self {
        let byte_offsets = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices()
                .map(|(pos, _)| pos)
                .chain(std::iter::once(text.len()))
                .collect()
        };

        Self {
            byte_offsets,
            len: text.len(),
        }
    }

    fn is_ascii(&self) -> bool {
        self.byte_offsets.is_empty()
    }

    /// Number of characters in the text
    pub fn char_len(&self) -> usize {
        if self.is_ascii() {
            self.len
        } else {
            self.byte_offsets.len() - 1
        }
    }

    /// Byte offset of character `offset`; `char_len()` maps to the text length
    pub fn to_byte(&self, offset: usize) -> Option<usize> {
        if self.is_ascii() {
            (offset <= self.len).then_some(offset)
        } else {
            self.byte_offsets.get(offset).copied()
        }
    }
}
