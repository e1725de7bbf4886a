//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::{open_corpora, resolve_patterns};
