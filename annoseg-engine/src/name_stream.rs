//! Name samples streamed from a document source

use crate::{
    error::{EngineError, Result},
    parser::DocumentParser,
    report::ParseReport,
    stream::{Restartable, SegmenterStream},
};
use annoseg_core::{AnnotatedDocument, NameSample};
use std::sync::{Arc, Mutex, PoisonError};

type ParseFn = Box<dyn FnMut(AnnotatedDocument) -> Result<Vec<NameSample>> + Send>;

/// Lazily converts a stream of documents into name samples
///
/// Documents are parsed one at a time with a shared [`DocumentParser`].
/// Upstream and parse errors are yielded once and end the stream. Counts
/// of produced samples and dropped annotations accumulate in
/// [`report`](Self::report).
pub struct NameSampleStream<I> {
    inner: SegmenterStream<I, ParseFn, NameSample>,
    report: Arc<Mutex<ParseReport>>,
}

impl<I> NameSampleStream<I>
where
    I: Iterator<Item = Result<AnnotatedDocument>>,
{
    /// Stream samples for every document of `documents`
    pub fn new(documents: I, parser: Arc<DocumentParser>) -> Self {
        let report = Arc::new(Mutex::new(ParseReport::default()));
        let shared = Arc::clone(&report);

        let parse: ParseFn = Box::new(move |document: AnnotatedDocument| {
            let (samples, document_report) = parser.parse_with_report(&document)?;
            *shared.lock().unwrap_or_else(PoisonError::into_inner) += &document_report;
            Ok(samples)
        });

        Self {
            inner: SegmenterStream::new(documents, parse),
            report,
        }
    }

    /// Statistics for the documents consumed so far
    pub fn report(&self) -> ParseReport {
        self.report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<I> Iterator for NameSampleStream<I>
where
    I: Iterator<Item = Result<AnnotatedDocument>>,
{
    type Item = Result<NameSample>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Restartable> Restartable for NameSampleStream<I> {
    /// Rewind the documents and clear the report
    fn reset(&mut self) {
        self.inner.reset();
        *self.report.lock().unwrap_or_else(PoisonError::into_inner) = ParseReport::default();
    }
}

/// Collect every sample of a stream, stopping at the first error
pub fn collect_samples<I>(stream: I) -> std::result::Result<Vec<NameSample>, EngineError>
where
    I: Iterator<Item = Result<NameSample>>,
{
    stream.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryDocumentStream;
    use annoseg_core::Span;

    fn parser() -> Arc<DocumentParser> {
        Arc::new(DocumentParser::for_language("en").unwrap())
    }

    fn corpus() -> Vec<AnnotatedDocument> {
        vec![
            AnnotatedDocument::new("a", "John lives in Paris. He works there.")
                .annotate("PERSON", 0, 4)
                .annotate("LOCATION", 14, 19),
            AnnotatedDocument::new("empty", "  "),
            AnnotatedDocument::new("b", "Mary left.").annotate("PERSON", 0, 4),
        ]
    }

    #[test]
    fn test_streams_all_samples_in_order() {
        let stream = NameSampleStream::new(MemoryDocumentStream::new(corpus()), parser());
        let samples = collect_samples(stream).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].id.as_deref(), Some("a"));
        assert!(samples[0].clear_adaptive_data);
        assert!(!samples[1].clear_adaptive_data);
        assert_eq!(samples[2].id.as_deref(), Some("b"));
        assert!(samples[2].clear_adaptive_data);
        assert_eq!(samples[2].names, vec![Span::typed(0, 1, "PERSON")]);
    }

    #[test]
    fn test_report_accumulates() {
        let mut stream = NameSampleStream::new(MemoryDocumentStream::new(corpus()), parser());
        stream.next();
        assert_eq!(stream.report().documents, 1);

        for sample in stream.by_ref() {
            sample.unwrap();
        }
        let report = stream.report();
        assert_eq!(report.documents, 3);
        assert_eq!(report.samples, 3);
        assert_eq!(report.names, 3);

        stream.reset();
        assert_eq!(stream.report(), ParseReport::default());
        assert_eq!(stream.count(), 3);
    }

    #[test]
    fn test_parse_error_ends_stream() {
        let documents = vec![
            AnnotatedDocument::new("bad", "Tiny.").annotate("X", 0, 50),
            AnnotatedDocument::new("good", "Fine."),
        ];
        let mut stream = NameSampleStream::new(MemoryDocumentStream::new(documents), parser());
        assert!(matches!(stream.next(), Some(Err(EngineError::Parse(_)))));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_upstream_error_passes_through() {
        let documents = vec![
            Ok(AnnotatedDocument::new("a", "One.")),
            Err(EngineError::Config("source broke".to_string())),
            Ok(AnnotatedDocument::new("b", "Two.")),
        ];
        let mut stream = NameSampleStream::new(documents.into_iter(), parser());
        assert!(stream.next().unwrap().is_ok());
        match stream.next() {
            Some(Err(EngineError::Config(message))) => assert_eq!(message, "source broke"),
            other => panic!("unexpected item: {other:?}"),
        }
        assert!(stream.next().is_none());
    }
}
