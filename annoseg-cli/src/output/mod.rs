//! Output formatting module

use annoseg_core::NameSample;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for sample formatters
pub trait SampleFormatter {
    /// Format and output a single sample
    fn format_sample(&mut self, sample: &NameSample) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod conll;
pub mod json;
pub mod opennlp;

pub use conll::ConllFormatter;
pub use json::JsonFormatter;
pub use opennlp::OpenNlpFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Name finder training format, one sentence per line
    #[default]
    Opennlp,
    /// JSON records with tokens and typed name spans
    Json,
    /// Token and BIO tag per line, blank line between sentences
    Conll,
}

impl OutputFormat {
    /// All formats with a short description, for `list formats`
    pub fn descriptions() -> [(&'static str, &'static str); 3] {
        [
            (
                "opennlp",
                "<START:type> name <END> markup, one sentence per line",
            ),
            ("json", "JSON records with tokens and typed name spans"),
            ("conll", "Token and BIO tag per line (CoNLL-2003 style)"),
        ]
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn SampleFormatter + 'a> {
    match format {
        OutputFormat::Opennlp => Box::new(OpenNlpFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Conll => Box::new(ConllFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use annoseg_core::{NameSample, Span};

    pub fn samples() -> Vec<NameSample> {
        let tokens = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        vec![
            NameSample::new(
                tokens(&["John", "lives", "in", "New", "York", "."]),
                vec![Span::typed(0, 1, "PERSON"), Span::typed(3, 5, "LOCATION")],
            )
            .with_id("a")
            .with_clear_adaptive_data(true),
            NameSample::new(tokens(&["He", "left", "."]), vec![]).with_id("a"),
            NameSample::new(tokens(&["Mary", "."]), vec![Span::typed(0, 1, "PERSON")])
                .with_id("b")
                .with_clear_adaptive_data(true),
        ]
    }
}
