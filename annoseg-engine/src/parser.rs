//! Document parser: annotated documents in, one name sample per sentence out

use crate::{
    config::{AlignmentPolicy, ParserConfig},
    error::{ParseError, Result},
    offsets::OffsetMap,
    report::{DropReason, ParseReport},
};
use annoseg_core::{
    AnnotatedDocument, EntityAnnotation, NameSample, RuleSentenceDetector, SentenceDetector,
    SimpleTokenizer, Span, Tokenizer,
};
use std::fmt;
use std::sync::Arc;

/// Annotation that passed the filter, with its byte span in the document
struct Candidate<'a> {
    annotation: &'a EntityAnnotation,
    span: Span,
}

/// Converts an [`AnnotatedDocument`] into flat [`NameSample`]s
///
/// The text is split into sentences and each sentence into tokens. Every
/// annotation is mapped onto the tokens of the sentence containing it.
/// Annotations that cross a sentence boundary or do not line up with token
/// boundaries are dropped with a warning, so the samples never carry a
/// partial name.
///
/// The parser holds no per-document state; one instance can be shared
/// across threads.
#[derive(Clone)]
pub struct DocumentParser {
    sentence_detector: Arc<dyn SentenceDetector>,
    tokenizer: Arc<dyn Tokenizer>,
    config: ParserConfig,
}

impl fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentParser")
            .field("sentence_detector", &"<SentenceDetector>")
            .field("tokenizer", &"<Tokenizer>")
            .field("config", &self.config)
            .finish()
    }
}

impl DocumentParser {
    /// Create a parser from segmenters with the default configuration
    pub fn new(
        sentence_detector: Arc<dyn SentenceDetector>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            sentence_detector,
            tokenizer,
            config: ParserConfig::default(),
        }
    }

    /// Create a parser using the built-in rules for `language` and the
    /// character-class tokenizer
    pub fn for_language(language: &str) -> Result<Self> {
        let detector = RuleSentenceDetector::for_language(language)?;
        Ok(Self::new(Arc::new(detector), Arc::new(SimpleTokenizer::new())))
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Convert one document into samples, one per detected sentence
    pub fn parse(
        &self,
        document: &AnnotatedDocument,
    ) -> std::result::Result<Vec<NameSample>, ParseError> {
        self.parse_with_report(document).map(|(samples, _)| samples)
    }

    /// Convert one document and report what was kept and dropped
    pub fn parse_with_report(
        &self,
        document: &AnnotatedDocument,
    ) -> std::result::Result<(Vec<NameSample>, ParseReport), ParseError> {
        let text = document.text.as_str();
        let offsets = OffsetMap::new(text);
        let mut report = ParseReport {
            documents: 1,
            ..Default::default()
        };

        let candidates = self.select_annotations(document, &offsets, &mut report)?;

        let sentences = self.sentence_detector.sent_pos_detect(text);
        validate_segmentation(&sentences, text, "sentence detector", &document.id)?;

        let mut assigned = vec![false; candidates.len()];
        let mut samples = Vec::with_capacity(sentences.len());

        for (index, sentence) in sentences.iter().enumerate() {
            let sentence_text = sentence.covered_text(text);
            let token_spans = self.tokenizer.tokenize_pos(sentence_text);
            validate_segmentation(&token_spans, sentence_text, "tokenizer", &document.id)?;

            let mut names = Vec::new();
            for (candidate, assigned) in candidates.iter().zip(assigned.iter_mut()) {
                if !sentence.contains(&candidate.span) {
                    continue;
                }
                *assigned = true;

                let local = Span::new(
                    candidate.span.start - sentence.start,
                    candidate.span.end - sentence.start,
                );
                match align(&token_spans, &local, self.config.alignment) {
                    Some((start, end)) => {
                        names.push(Span::typed(start, end, candidate.annotation.kind.clone()))
                    }
                    None => drop_annotation(
                        document,
                        candidate.annotation,
                        &candidate.span,
                        DropReason::Misaligned,
                        &mut report,
                    ),
                }
            }

            let tokens = token_spans
                .iter()
                .map(|span| span.covered_text(sentence_text).to_string())
                .collect();

            report.names += names.len();
            samples.push(
                NameSample::new(tokens, names)
                    .with_id(document.id.clone())
                    .with_clear_adaptive_data(index == 0),
            );
        }

        for (candidate, _) in candidates
            .iter()
            .zip(&assigned)
            .filter(|(_, assigned)| !**assigned)
        {
            drop_annotation(
                document,
                candidate.annotation,
                &candidate.span,
                DropReason::CrossesSentence,
                &mut report,
            );
        }

        report.samples = samples.len();
        log::debug!(
            "{}: {} sentences, {} names, {} dropped",
            document.id,
            report.samples,
            report.names,
            report.dropped()
        );

        Ok((samples, report))
    }

    /// Filter, bounds-check and convert annotations to byte spans
    fn select_annotations<'a>(
        &self,
        document: &'a AnnotatedDocument,
        offsets: &OffsetMap,
        report: &mut ParseReport,
    ) -> std::result::Result<Vec<Candidate<'a>>, ParseError> {
        let char_len = offsets.char_len();
        let mut candidates = Vec::with_capacity(document.annotations.len());

        for annotation in &document.annotations {
            if !self.config.accepts(&annotation.kind) {
                report.filtered += 1;
                continue;
            }

            let out_of_bounds = || ParseError::AnnotationOutOfBounds {
                document: document.id.clone(),
                annotation: annotation.id.clone(),
                end: annotation.start.max(annotation.end),
                len: char_len,
            };
            let start = offsets.to_byte(annotation.start).ok_or_else(out_of_bounds)?;
            let end = offsets.to_byte(annotation.end).ok_or_else(out_of_bounds)?;

            if start >= end {
                drop_annotation(
                    document,
                    annotation,
                    &Span::new(start, start),
                    DropReason::Empty,
                    report,
                );
                continue;
            }

            let mut span = Span::new(start, end);
            if self.config.trim_annotations {
                span = span.trim(&document.text);
                if span.is_empty() {
                    drop_annotation(document, annotation, &span, DropReason::Empty, report);
                    continue;
                }
            }

            candidates.push(Candidate { annotation, span });
        }

        Ok(candidates)
    }
}

/// Map a byte span onto a token index range `[start, end)`
fn align(tokens: &[Span], span: &Span, policy: AlignmentPolicy) -> Option<(usize, usize)> {
    match policy {
        AlignmentPolicy::Strict => {
            let start = tokens.iter().position(|token| token.start == span.start)?;
            let end = tokens[start..]
                .iter()
                .position(|token| token.end == span.end)?;
            Some((start, start + end + 1))
        }
        AlignmentPolicy::Covering => {
            let start = tokens.iter().position(|token| token.intersects(span))?;
            let end = tokens.iter().rposition(|token| token.intersects(span))?;
            Some((start, end + 1))
        }
    }
}

/// Check segmenter output: ordered, non-overlapping, non-empty, in bounds
fn validate_segmentation(
    spans: &[Span],
    text: &str,
    segmenter: &'static str,
    document: &str,
) -> std::result::Result<(), ParseError> {
    let mut previous_end = 0;

    for span in spans {
        let reason = if span.start >= span.end {
            Some(format!("span {span} is empty"))
        } else if span.start < previous_end {
            Some(format!("span {span} overlaps or precedes the previous span"))
        } else if span.end > text.len() {
            Some(format!("span {span} exceeds the text length {}", text.len()))
        } else if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
            Some(format!("span {span} splits a character"))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ParseError::InconsistentSegmentation {
                document: document.to_string(),
                segmenter,
                reason,
            });
        }
        previous_end = span.end;
    }

    Ok(())
}

fn drop_annotation(
    document: &AnnotatedDocument,
    annotation: &EntityAnnotation,
    span: &Span,
    reason: DropReason,
    report: &mut ParseReport,
) {
    log::warn!(
        "{}: dropping {} {} \"{}\": {}",
        document.id,
        annotation.kind,
        annotation.id,
        span.covered_text(&document.text),
        reason
    );
    report.record_drop(reason);
}
