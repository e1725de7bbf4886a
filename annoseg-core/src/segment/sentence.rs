//! Rule-based sentence detector driven by [`LanguageRules`]

use super::{push_trimmed, SentenceDetector};
use crate::error::Result;
use crate::language::{get_rules, BoundaryDecision, EnclosureRole, LanguageRules};
use crate::span::Span;
use std::collections::HashSet;
use std::sync::Arc;

/// Sentence detector scanning for terminators
///
/// Terminators inside an open bracket or quote pair are ignored. An opener
/// with no closer before the end of its paragraph does not count as open.
/// At every
/// other terminator the language rules decide whether it can end a
/// sentence (decimal points, abbreviations and exception patterns cannot).
/// Consecutive terminators and closing punctuation are absorbed into the
/// sentence. When the rules require it, the terminator run must be followed
/// by whitespace or the end of the text. An ellipsis followed by a lowercase
/// word does not end a sentence. Blank lines end the current sentence when
/// the rules enable paragraph breaks.
#[derive(Debug, Clone)]
pub struct RuleSentenceDetector {
    rules: Arc<LanguageRules>,
}

impl RuleSentenceDetector {
    /// Create a detector from compiled rules
    pub fn new(rules: Arc<LanguageRules>) -> Self {
        Self { rules }
    }

    /// Create a detector with built-in rules (`en`, `english`, `ja`, `japanese`)
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(get_rules(code)?))
    }

    /// Rules in use
    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }
}

impl SentenceDetector for RuleSentenceDetector {
    fn sent_pos_detect(&self, text: &str) -> Vec<Span> {
        let rules = &*self.rules;
        let mut spans = Vec::new();
        let mut start = 0;
        let mut prev: Option<char> = None;
        let mut depth = 0usize;
        let unmatched = unmatched_openers(rules, text);
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match rules.enclosure(ch) {
                Some(EnclosureRole::Open) if !unmatched.contains(&pos) => depth += 1,
                Some(EnclosureRole::Open) => {}
                Some(EnclosureRole::Close) => depth = depth.saturating_sub(1),
                None => {}
            }

            if rules.is_terminator(ch) && depth == 0 {
                let next = chars.peek().map(|&(_, c)| c);
                if rules.boundary_decision(text, pos, ch, prev, next) == BoundaryDecision::Reject {
                    prev = Some(ch);
                    continue;
                }

                // Absorb the rest of the terminator run and closing punctuation
                let mut end = pos + ch.len_utf8();
                let mut last = ch;
                let mut ellipsis = ch == '…';
                while let Some(&(p, c)) = chars.peek() {
                    if !rules.is_terminator(c) && !rules.is_closer(c) {
                        break;
                    }
                    ellipsis |= c == '…' || (c == '.' && last == '.');
                    end = p + c.len_utf8();
                    last = c;
                    chars.next();
                }
                prev = Some(last);

                let following = chars.peek().map(|&(_, c)| c);
                if rules.requires_whitespace() && following.is_some_and(|c| !c.is_whitespace()) {
                    continue;
                }
                if ellipsis && continues_lowercase(&text[end..]) {
                    continue;
                }

                push_trimmed(text, start, end, &mut spans);
                start = end;
                continue;
            }

            if ch == '\n' && rules.breaks_on_blank_lines() && is_blank_line(&text[pos + 1..]) {
                push_trimmed(text, start, pos, &mut spans);
                start = pos + 1;
            }
            prev = Some(ch);
        }

        push_trimmed(text, start, text.len(), &mut spans);
        spans
    }
}

/// Byte positions of openers left unclosed at the end of their paragraph
fn unmatched_openers(rules: &LanguageRules, text: &str) -> HashSet<usize> {
    let mut open = Vec::new();
    let mut unmatched = HashSet::new();

    for (pos, ch) in text.char_indices() {
        match rules.enclosure(ch) {
            Some(EnclosureRole::Open) => open.push(pos),
            Some(EnclosureRole::Close) => {
                open.pop();
            }
            None => {}
        }
        if ch == '\n' && rules.breaks_on_blank_lines() && is_blank_line(&text[pos + 1..]) {
            unmatched.extend(open.drain(..));
        }
    }
    unmatched.extend(open);

    for &pos in &unmatched {
        log::debug!("unclosed enclosure opener at byte {pos}");
    }
    unmatched
}

/// True if the line starting at `rest` holds only horizontal whitespace
fn is_blank_line(rest: &str) -> bool {
    for c in rest.chars() {
        match c {
            '\n' => return true,
            ' ' | '\t' | '\r' => continue,
            _ => return false,
        }
    }
    false
}

/// True if the next non-whitespace character is lowercase
fn continues_lowercase(rest: &str) -> bool {
    rest.chars()
        .find(|c| !c.is_whitespace())
        .is_some_and(char::is_lowercase)
}
