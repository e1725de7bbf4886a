//! Name finder training format output

use super::SampleFormatter;
use annoseg_core::NameSample;
use anyhow::Result;
use std::io::Write;

/// One sample per line; an empty line separates documents
pub struct OpenNlpFormatter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> OpenNlpFormatter<W> {
    /// Create a new formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            first: true,
        }
    }
}

impl<W: Write> SampleFormatter for OpenNlpFormatter<W> {
    fn format_sample(&mut self, sample: &NameSample) -> Result<()> {
        // An empty line tells the name finder to clear its adaptive data
        if sample.clear_adaptive_data && !self.first {
            writeln!(self.writer)?;
        }
        self.first = false;
        if sample.has_overlapping_names() {
            log::debug!(
                "{}: {} overlapping names dropped from OpenNLP output",
                sample.id.as_deref().unwrap_or("<unknown>"),
                sample.names.len() - sample.flat_names().len()
            );
        }
        writeln!(self.writer, "{sample}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::samples;
    use annoseg_core::Span;

    #[test]
    fn test_documents_separated_by_empty_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = OpenNlpFormatter::new(&mut buffer);
            for sample in samples() {
                formatter.format_sample(&sample).unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "<START:PERSON> John <END> lives in <START:LOCATION> New York <END> .\n\
             He left .\n\
             \n\
             <START:PERSON> Mary <END> .\n"
        );
    }

    #[test]
    fn test_overlapping_names_keep_outer() {
        let tokens = ["New", "York", "City", "."].map(String::from).to_vec();
        let sample = NameSample::new(
            tokens,
            vec![Span::typed(0, 3, "LOCATION"), Span::typed(0, 2, "CITY")],
        )
        .with_id("nested");

        let mut buffer = Vec::new();
        {
            let mut formatter = OpenNlpFormatter::new(&mut buffer);
            formatter.format_sample(&sample).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<START:LOCATION> New York City <END> .\n"
        );
    }
}
