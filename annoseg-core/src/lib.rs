//! Data model and segmentation for turning annotated documents into name samples
//!
//! This crate holds the pieces shared by the document parser and its front
//! ends:
//! - **Data model**: [`AnnotatedDocument`] with character-offset
//!   [`EntityAnnotation`]s, and the flat [`NameSample`] produced per sentence
//! - **Segmenters**: the [`SentenceDetector`] and [`Tokenizer`] capabilities
//!   with rule-based implementations
//! - **Language rules**: TOML-described terminators, abbreviations and
//!   exceptions, with English and Japanese built in
//! - **Resources**: the [`ResourceProvider`] lookup used by feature
//!   generators to reach gazetteers and other model-bundled data
//!
//! # Example
//!
//! ```rust
//! use annoseg_core::{RuleSentenceDetector, SentenceDetector, SimpleTokenizer, Tokenizer};
//!
//! let detector = RuleSentenceDetector::for_language("en").unwrap();
//! let sentences = detector.sent_detect("John lives in Paris. He works there.");
//! assert_eq!(sentences, vec!["John lives in Paris.", "He works there."]);
//!
//! let tokens = SimpleTokenizer::new().tokenize(sentences[0]);
//! assert_eq!(tokens, vec!["John", "lives", "in", "Paris", "."]);
//! ```

pub mod document;
pub mod error;
pub mod language;
pub mod resource;
pub mod sample;
pub mod segment;
pub mod span;

pub use document::{AnnotatedDocument, EntityAnnotation};
pub use error::{CoreError, Result};
pub use language::{available_languages, get_rules, LanguageConfig, LanguageRules};
pub use resource::{Resource, ResourceMap, ResourceProvider, ResourceProviderExt};
pub use sample::{NameSample, DEFAULT_TYPE};
pub use segment::{
    RuleSentenceDetector, SentenceDetector, SimpleTokenizer, Tokenizer, WhitespaceTokenizer,
};
pub use span::Span;
