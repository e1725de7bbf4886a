//! Batch parsing on the rayon thread pool

use crate::{error::ParseError, parser::DocumentParser, report::ParseReport};
use annoseg_core::{AnnotatedDocument, NameSample};
use rayon::prelude::*;

/// Samples of one document, or the reason it could not be parsed
pub type DocumentResult = Result<(Vec<NameSample>, ParseReport), ParseError>;

/// Parse a batch of documents in parallel
///
/// Results are returned in input order; one failing document does not
/// stop the others.
pub fn parse_all(parser: &DocumentParser, documents: &[AnnotatedDocument]) -> Vec<DocumentResult> {
    documents
        .par_iter()
        .map(|document| parser.parse_with_report(document))
        .collect()
}

/// Parse a batch in parallel and merge it into one ordered sample list
///
/// Fails with the first error in input order.
pub fn parse_batch(
    parser: &DocumentParser,
    documents: &[AnnotatedDocument],
) -> Result<(Vec<NameSample>, ParseReport), ParseError> {
    let mut samples = Vec::new();
    let mut report = ParseReport::default();

    for result in parse_all(parser, documents) {
        let (document_samples, document_report) = result?;
        samples.extend(document_samples);
        report += &document_report;
    }

    Ok((samples, report))
}
