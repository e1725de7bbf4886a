//! JSON output formatter

use super::SampleFormatter;
use annoseg_core::NameSample;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter
///
/// Writes one record per line by default; in pretty mode the records are
/// collected and written as an indented array on [`finish`](SampleFormatter::finish).
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<SampleRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SampleRecord {
    /// Source document id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Sentence tokens
    pub tokens: Vec<String>,
    /// Names over token indices
    pub names: Vec<NameRecord>,
    /// First sentence of its document
    pub clear_adaptive_data: bool,
}

/// A typed name over token indices
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NameRecord {
    /// First token
    pub start: usize,
    /// One past the last token
    pub end: usize,
    /// Entity type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Covered tokens joined with spaces
    pub text: String,
}

impl From<&NameSample> for SampleRecord {
    fn from(sample: &NameSample) -> Self {
        let names = sample
            .names
            .iter()
            .map(|name| NameRecord {
                start: name.start,
                end: name.end,
                kind: name.kind.clone(),
                text: sample.name_tokens(name).join(" "),
            })
            .collect();

        Self {
            document: sample.id.clone(),
            tokens: sample.tokens.clone(),
            names,
            clear_adaptive_data: sample.clear_adaptive_data,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            records: Vec::new(),
        }
    }

    /// Write an indented array instead of JSON lines
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write> SampleFormatter for JsonFormatter<W> {
    fn format_sample(&mut self, sample: &NameSample) -> Result<()> {
        let record = SampleRecord::from(sample);
        if self.pretty {
            self.records.push(record);
        } else {
            serde_json::to_writer(&mut self.writer, &record)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
