//! Convert command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{open_corpora, resolve_patterns};
use crate::language_source::LanguageSource;
use crate::output::{create_formatter, OutputFormat, SampleFormatter};
use crate::progress::ProgressReporter;
use annoseg_core::{
    AnnotatedDocument, RuleSentenceDetector, SentenceDetector, SimpleTokenizer, Tokenizer,
    WhitespaceTokenizer,
};
use annoseg_engine::parallel::DocumentResult;
use annoseg_engine::{
    parse_all, AlignmentPolicy, BratDocumentStream, DocumentParser, EngineError, NameSampleStream,
    ParseReport, ParserConfig,
};
use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// brat corpus directories, .ann files or glob patterns
    #[arg(short, long, value_name = "DIR/PATTERN", required = true)]
    pub data: Vec<String>,

    /// Entity types to keep (default: all)
    #[arg(short, long, value_name = "TYPE", value_delimiter = ',')]
    pub types: Vec<String>,

    /// Language for sentence detection rules
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,

    /// Tokenizer splitting sentences into tokens
    #[arg(long, value_enum)]
    pub tokenizer: Option<TokenizerKind>,

    /// How annotations are mapped onto tokens
    #[arg(long, value_enum)]
    pub alignment: Option<Alignment>,

    /// Keep discontinuous annotations as their overall extent
    #[arg(long)]
    pub merge_fragments: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Parse documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English language rules
    English,
    /// Japanese language rules
    Japanese,
}

/// Supported tokenizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Split on whitespace and character class changes
    #[default]
    Simple,
    /// Split on whitespace only
    Whitespace,
}

/// Supported alignment policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Annotations must start and end on token boundaries
    #[default]
    Strict,
    /// Widen annotations to the tokens they overlap
    Covering,
}

impl From<Alignment> for AlignmentPolicy {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Strict => AlignmentPolicy::Strict,
            Alignment::Covering => AlignmentPolicy::Covering,
        }
    }
}

/// Effective settings after merging flags over the config file
#[derive(Debug)]
struct Settings {
    language: LanguageSource,
    tokenizer: TokenizerKind,
    alignment: AlignmentPolicy,
    types: Vec<String>,
    merge_fragments: bool,
    format: OutputFormat,
    pretty_json: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        log::info!("Starting corpus conversion");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        log::info!("Language: {}", settings.language.display_name());

        let parser = Arc::new(build_parser(&settings)?);
        let corpora = resolve_patterns(&self.data)?;
        let streams = open_corpora(&corpora, settings.merge_fragments)?;
        let total: usize = streams.iter().map(BratDocumentStream::len).sum();
        log::info!("{} documents in {} corpora", total, corpora.len());

        let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
        progress.init_documents(total as u64);

        let writer = self.open_output()?;
        let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);

        let report = if self.parallel || self.threads.is_some() {
            self.convert_parallel(streams, &parser, formatter.as_mut(), &progress)?
        } else {
            convert_streaming(streams, parser, formatter.as_mut(), &progress)?
        };

        formatter.finish()?;
        progress.finish();

        log::info!("{report}");
        if !self.quiet {
            eprintln!("Converted {report}");
        }
        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let language = match &self.language_config {
            Some(path) => LanguageSource::External { path: path.clone() },
            None => LanguageSource::BuiltIn(
                self.language
                    .or(config.processing.language)
                    .unwrap_or(Language::English),
            ),
        };

        let alignment: AlignmentPolicy = self
            .alignment
            .or(config.processing.alignment)
            .unwrap_or_default()
            .into();

        let types = if self.types.is_empty() {
            config.processing.types
        } else {
            self.types.clone()
        };

        Ok(Settings {
            language,
            tokenizer: self
                .tokenizer
                .or(config.processing.tokenizer)
                .unwrap_or_default(),
            alignment,
            types,
            merge_fragments: self.merge_fragments || config.processing.merge_fragments,
            format: self.format.or(config.output.format).unwrap_or_default(),
            pretty_json: config.output.pretty_json,
        })
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    fn convert_parallel(
        &self,
        streams: Vec<BratDocumentStream>,
        parser: &DocumentParser,
        formatter: &mut dyn SampleFormatter,
        progress: &ProgressReporter,
    ) -> Result<ParseReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads.unwrap_or(0))
            .build()
            .context("Failed to create thread pool")?;
        let batch_size = pool.current_num_threads() * DOCUMENTS_PER_THREAD;
        log::debug!(
            "parsing on {} threads, {} documents per batch",
            pool.current_num_threads(),
            batch_size
        );

        convert_batches(
            streams.into_iter().flatten(),
            batch_size,
            |batch| pool.install(|| parse_all(parser, batch)),
            formatter,
            progress,
        )
    }
}

/// Documents read ahead per worker thread in parallel mode
const DOCUMENTS_PER_THREAD: usize = 16;

/// Parse `documents` in batches of `batch_size`, writing each batch in
/// order before reading the next
///
/// A read error ends the conversion after the documents read before it
/// have been written, as in streaming mode.
fn convert_batches<I, P>(
    mut documents: I,
    batch_size: usize,
    parse: P,
    formatter: &mut dyn SampleFormatter,
    progress: &ProgressReporter,
) -> Result<ParseReport>
where
    I: Iterator<Item = Result<AnnotatedDocument, EngineError>>,
    P: Fn(&[AnnotatedDocument]) -> Vec<DocumentResult>,
{
    let mut report = ParseReport::default();

    loop {
        let mut batch = Vec::with_capacity(batch_size);
        let mut read_error = None;
        for document in documents.by_ref().take(batch_size.max(1)) {
            match document {
                Ok(document) => batch.push(document),
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            }
        }
        if batch.is_empty() && read_error.is_none() {
            return Ok(report);
        }

        for (document, result) in batch.iter().zip(parse(&batch)) {
            let (samples, document_report) =
                result.map_err(|e| CliError::ConversionError(e.to_string()))?;
            for sample in &samples {
                formatter.format_sample(sample)?;
            }
            report += &document_report;
            progress.document_completed(&document.id);
        }

        if let Some(e) = read_error {
            return Err(CliError::ConversionError(e.to_string()).into());
        }
    }
}

fn build_parser(settings: &Settings) -> Result<DocumentParser> {
    let rules = settings.language.load()?;
    let detector: Arc<dyn SentenceDetector> = Arc::new(RuleSentenceDetector::new(rules));
    let tokenizer: Arc<dyn Tokenizer> = match settings.tokenizer {
        TokenizerKind::Simple => Arc::new(SimpleTokenizer::new()),
        TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer),
    };

    let mut builder = ParserConfig::builder().alignment(settings.alignment);
    if !settings.types.is_empty() {
        builder = builder.entity_types(settings.types.iter().cloned());
    }
    let config = builder.build()?;

    Ok(DocumentParser::new(detector, tokenizer).with_config(config))
}

fn convert_streaming(
    streams: Vec<BratDocumentStream>,
    parser: Arc<DocumentParser>,
    formatter: &mut dyn SampleFormatter,
    progress: &ProgressReporter,
) -> Result<ParseReport> {
    let documents = streams.into_iter().flatten().inspect(|document| {
        if let Ok(document) = document {
            progress.document_completed(&document.id);
        }
    });

    let mut samples = NameSampleStream::new(documents, parser);
    for sample in samples.by_ref() {
        let sample = sample.map_err(|e| CliError::ConversionError(e.to_string()))?;
        formatter.format_sample(&sample)?;
    }
    Ok(samples.report())
}
