//! Runtime tables for language rules
//!
//! Tables are built once from configuration and are allocation-free during lookup.

pub mod abbreviation;
pub mod terminator;

pub use abbreviation::Trie;
pub use terminator::{classify_dot, CharTable, DotRole};
