//! Conversion of annotated documents into name finder training samples
//!
//! This crate provides the [`DocumentParser`], which splits a document into
//! sentences and tokens and maps its character-offset annotations onto
//! token indices, and the lazy streams that apply it to a whole corpus.
//!
//! # Example
//!
//! ```rust
//! use annoseg_core::AnnotatedDocument;
//! use annoseg_engine::{DocumentParser, MemoryDocumentStream, NameSampleStream};
//! use std::sync::Arc;
//!
//! let document = AnnotatedDocument::new("doc", "John lives in Paris. He works there.")
//!     .annotate("PERSON", 0, 4)
//!     .annotate("LOCATION", 14, 19);
//!
//! let parser = Arc::new(DocumentParser::for_language("en").unwrap());
//! let stream = NameSampleStream::new(MemoryDocumentStream::new(vec![document]), parser);
//!
//! let samples: Vec<_> = stream.collect::<Result<_, _>>().unwrap();
//! assert_eq!(samples.len(), 2);
//! assert_eq!(
//!     samples[0].to_string(),
//!     "<START:PERSON> John <END> lives in <START:LOCATION> Paris <END> ."
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod name_stream;
pub mod offsets;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod parser;
pub mod report;
pub mod source;
pub mod stream;

pub use config::{AlignmentPolicy, ParserConfig, ParserConfigBuilder};
pub use error::{EngineError, ParseError, Result};
pub use name_stream::{collect_samples, NameSampleStream};
pub use offsets::OffsetMap;
#[cfg(feature = "parallel")]
pub use parallel::{parse_all, parse_batch};
pub use parser::DocumentParser;
pub use report::{DropReason, ParseReport};
pub use source::{BratDocumentStream, MemoryDocumentStream};
pub use stream::{Restartable, SegmentExt, SegmenterStream};

// Re-export from core for convenience
pub use annoseg_core::{AnnotatedDocument, EntityAnnotation, NameSample, Span};
