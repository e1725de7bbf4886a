//! Abbreviation trie for backward scanning from a dot
//!
//! Nodes live in one contiguous vector and refer to children by index.

use std::collections::HashMap;

/// Characters that end the word preceding a dot when scanning backwards
const WORD_DELIMITERS: &[char] = &[
    ',', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'', '!', '?', '“', '”', '‘', '’',
];

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    is_end: bool,
}

/// Case-insensitive (by default) abbreviation trie
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
}

impl Trie {
    /// Create empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
        }
    }

    /// Build from configuration categories
    ///
    /// Multi-period abbreviations like `U.S.A` also register their prefixes
    /// (`U`, `U.S`) so intermediate dots are recognized.
    pub fn from_categories<'a, I>(abbreviations: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut trie = Self::new(case_sensitive);

        for abbr in abbreviations {
            let abbr = abbr.trim().trim_end_matches('.');
            trie.insert(abbr);

            let parts: Vec<&str> = abbr.split('.').collect();
            for i in 1..parts.len() {
                let prefix = parts[..i].join(".");
                if !prefix.is_empty() {
                    trie.insert(&prefix);
                }
            }
        }

        trie
    }

    /// Insert one abbreviation (without its final dot)
    pub fn insert(&mut self, abbreviation: &str) {
        let mut current = 0usize;

        for ch in abbreviation.chars() {
            let ch = self.normalize(ch);
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }

        self.nodes[current].is_end = true;
    }

    /// Number of abbreviations and prefixes stored
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_end).count()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the word ending right before the dot at byte `dot_pos` is
    /// a known abbreviation
    pub fn matches_before(&self, text: &str, dot_pos: usize) -> bool {
        if dot_pos == 0 || dot_pos > text.len() || !text.is_char_boundary(dot_pos) {
            return false;
        }

        let before = &text[..dot_pos];
        let word_start = before
            .char_indices()
            .rev()
            .find(|&(_, ch)| ch.is_whitespace() || WORD_DELIMITERS.contains(&ch))
            .map(|(pos, ch)| pos + ch.len_utf8())
            .unwrap_or(0);

        let word = &before[word_start..];
        !word.is_empty() && self.matches(word)
    }

    /// Exact lookup of a word
    pub fn matches(&self, word: &str) -> bool {
        let mut current = 0usize;

        for ch in word.chars() {
            match self.nodes[current].children.get(&self.normalize(ch)) {
                Some(&child) => current = child as usize,
                None => return false,
            }
        }

        current != 0 && self.nodes[current].is_end
    }

    #[inline]
    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }
}
