//! CoNLL-style BIO output

use super::SampleFormatter;
use annoseg_core::NameSample;
use anyhow::Result;
use std::io::Write;

const DOCUMENT_START: &str = "-DOCSTART-\tO";

/// `token<TAB>tag` per line, an empty line after each sentence and a
/// `-DOCSTART-` line before each document
///
/// Overlapping names cannot be expressed in BIO; only the outermost
/// leftmost ones are written.
pub struct ConllFormatter<W: Write> {
    writer: W,
}

impl<W: Write> ConllFormatter<W> {
    /// Create a new formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SampleFormatter for ConllFormatter<W> {
    fn format_sample(&mut self, sample: &NameSample) -> Result<()> {
        if sample.clear_adaptive_data {
            writeln!(self.writer, "{DOCUMENT_START}")?;
            writeln!(self.writer)?;
        }
        if sample.has_overlapping_names() {
            log::debug!(
                "{}: overlapping names flattened for BIO output",
                sample.id.as_deref().unwrap_or("<unknown>")
            );
        }

        for (token, tag) in sample.tokens.iter().zip(sample.bio_tags()) {
            writeln!(self.writer, "{token}\t{tag}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
