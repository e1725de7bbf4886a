//! Annotated documents: raw text plus character-offset entity annotations

/// A text-bound entity annotation
///
/// Offsets count Unicode scalar values (characters), not bytes, and form a
/// half-open interval.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EntityAnnotation {
    /// Annotation identifier, e.g. `T3`
    pub id: String,
    /// Entity type label
    pub kind: String,
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
    /// Text recorded next to the annotation, if the source carries it
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub covered_text: Option<String>,
}

impl EntityAnnotation {
    /// Create an annotation without recorded text
    pub fn new(id: impl Into<String>, kind: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            start,
            end,
            covered_text: None,
        }
    }

    /// Attach the text the source recorded for this annotation
    pub fn with_covered_text(mut self, text: impl Into<String>) -> Self {
        self.covered_text = Some(text.into());
        self
    }
}

/// One input unit: identifier, raw text and its entity annotations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AnnotatedDocument {
    /// Document identifier
    pub id: String,
    /// Raw document text
    pub text: String,
    /// Entity annotations in source order
    #[cfg_attr(feature = "serialize", serde(default))]
    pub annotations: Vec<EntityAnnotation>,
}

impl AnnotatedDocument {
    /// Create a document with no annotations
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Append an annotation
    pub fn with_annotation(mut self, annotation: EntityAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append an annotation, generating its id from the current count
    pub fn annotate(mut self, kind: impl Into<String>, start: usize, end: usize) -> Self {
        let id = format!("T{}", self.annotations.len() + 1);
        self.annotations
            .push(EntityAnnotation::new(id, kind, start, end));
        self
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
