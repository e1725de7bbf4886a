//! In-memory document source

use crate::{error::Result, stream::Restartable};
use annoseg_core::AnnotatedDocument;

/// Documents held in memory, yielded in order
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStream {
    documents: Vec<AnnotatedDocument>,
    position: usize,
}

impl MemoryDocumentStream {
    /// Stream over `documents`
    pub fn new(documents: Vec<AnnotatedDocument>) -> Self {
        Self {
            documents,
            position: 0,
        }
    }

    /// Total number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if there are no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<AnnotatedDocument> for MemoryDocumentStream {
    fn from_iter<T: IntoIterator<Item = AnnotatedDocument>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Iterator for MemoryDocumentStream {
    type Item = Result<AnnotatedDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.documents.get(self.position)?.clone();
        self.position += 1;
        Some(Ok(document))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.documents.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MemoryDocumentStream {}

impl Restartable for MemoryDocumentStream {
    fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_in_order_and_resets() {
        let mut stream: MemoryDocumentStream = ["a", "b"]
            .into_iter()
            .map(|id| AnnotatedDocument::new(id, "Text."))
            .collect();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.size_hint(), (2, Some(2)));

        let ids: Vec<String> = stream.by_ref().map(|doc| doc.unwrap().id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(stream.next().is_none());

        stream.reset();
        assert_eq!(stream.next().unwrap().unwrap().id, "a");
    }
}
