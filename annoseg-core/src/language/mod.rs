//! Language-specific rules for the rule-based sentence detector
//!
//! Rules are data: terminators, closing punctuation, abbreviations and
//! exception patterns are described in TOML. English and Japanese are
//! embedded; other languages are loaded from files.

pub mod config;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use config::LanguageConfig;
pub use loader::{available_languages, get_rules};
pub use runtime::{BoundaryDecision, EnclosureRole, LanguageRules};
