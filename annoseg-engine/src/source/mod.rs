//! Document sources feeding the parser

pub mod brat;
pub mod memory;

pub use brat::{parse_annotations, BratDocumentStream};
pub use memory::MemoryDocumentStream;
