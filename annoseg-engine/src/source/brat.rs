//! brat standoff corpus reader
//!
//! A corpus is a directory of `<name>.txt` / `<name>.ann` pairs. Only
//! text-bound annotations are read:
//!
//! ```text
//! T1	PERSON 0 4	John
//! T2	LOCATION 14 19;24 28	Paris ... York
//! ```
//!
//! Relations, events, attributes, normalizations and notes are ignored.

use crate::{
    error::{EngineError, Result},
    stream::Restartable,
};
use annoseg_core::{AnnotatedDocument, EntityAnnotation};
use std::fs;
use std::path::{Path, PathBuf};

const ANNOTATION_EXTENSION: &str = "ann";
const TEXT_EXTENSION: &str = "txt";

/// Lazily reads the documents of a brat corpus in file name order
#[derive(Debug, Clone)]
pub struct BratDocumentStream {
    root: PathBuf,
    files: Vec<PathBuf>,
    position: usize,
    merge_fragments: bool,
}

impl BratDocumentStream {
    /// Open a corpus directory (searched recursively) or a single `.ann` file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| EngineError::io(path, e))?;

        if metadata.is_file() {
            let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
            return Ok(Self::from_files(root, vec![path.to_path_buf()]));
        }

        let mut files = Vec::new();
        collect_annotation_files(path, &mut files)?;
        log::debug!("{}: {} annotation files", path.display(), files.len());
        Ok(Self::from_files(path, files))
    }

    /// Stream the given `.ann` files; document ids are relative to `root`
    pub fn from_files(root: impl Into<PathBuf>, mut files: Vec<PathBuf>) -> Self {
        files.sort();
        Self {
            root: root.into(),
            files,
            position: 0,
            merge_fragments: false,
        }
    }

    /// Keep discontinuous annotations as their overall extent instead of
    /// skipping them
    pub fn merge_fragments(mut self, merge: bool) -> Self {
        self.merge_fragments = merge;
        self
    }

    /// Annotation files in reading order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn document_id(&self, ann_path: &Path) -> String {
        let relative = ann_path.strip_prefix(&self.root).unwrap_or(ann_path);
        relative
            .with_extension("")
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn read_document(&self, ann_path: &Path) -> Result<AnnotatedDocument> {
        let txt_path = ann_path.with_extension(TEXT_EXTENSION);
        let text = fs::read_to_string(&txt_path).map_err(|e| EngineError::io(&txt_path, e))?;
        let source = fs::read_to_string(ann_path).map_err(|e| EngineError::io(ann_path, e))?;

        let annotations = parse_annotations(&source, ann_path, self.merge_fragments)?;
        let id = self.document_id(ann_path);
        check_covered_text(&id, &text, &annotations);

        Ok(AnnotatedDocument {
            id,
            text,
            annotations,
        })
    }
}

impl Iterator for BratDocumentStream {
    type Item = Result<AnnotatedDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        let ann_path = self.files.get(self.position)?.clone();
        self.position += 1;
        Some(self.read_document(&ann_path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.files.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl Restartable for BratDocumentStream {
    fn reset(&mut self) {
        self.position = 0;
    }
}

fn collect_annotation_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| EngineError::io(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| EngineError::io(dir, e))?.path();
        if path.is_dir() {
            collect_annotation_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == ANNOTATION_EXTENSION) {
            files.push(path);
        }
    }

    Ok(())
}

/// Parse the text-bound annotations of a `.ann` file
///
/// `path` is only used in error messages. Discontinuous annotations are
/// skipped with a warning unless `merge_fragments` is set, in which case
/// they span from their first start to their last end.
pub fn parse_annotations(
    source: &str,
    path: &Path,
    merge_fragments: bool,
) -> Result<Vec<EntityAnnotation>> {
    let mut annotations = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if !line.starts_with('T') {
            continue;
        }

        let format_error = |reason: String| EngineError::Format {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        };

        let mut columns = line.splitn(3, '\t');
        let id = columns.next().unwrap_or_default();
        let header = columns
            .next()
            .ok_or_else(|| format_error(format!("annotation {id} has no type and offsets")))?;
        let covered_text = columns.next();

        let (kind, ranges) = header
            .split_once(' ')
            .ok_or_else(|| format_error(format!("annotation {id} has no offsets")))?;

        let fragments = ranges
            .split(';')
            .map(|range| parse_range(range).map_err(format_error))
            .collect::<Result<Vec<_>>>()?;

        if fragments.len() > 1 && !merge_fragments {
            log::warn!(
                "{}:{}: skipping discontinuous annotation {id} ({kind})",
                path.display(),
                index + 1
            );
            continue;
        }

        let start = fragments.iter().map(|&(start, _)| start).min().unwrap_or(0);
        let end = fragments.iter().map(|&(_, end)| end).max().unwrap_or(0);

        let mut annotation = EntityAnnotation::new(id, kind, start, end);
        if let Some(text) = covered_text {
            annotation = annotation.with_covered_text(text);
        }
        annotations.push(annotation);
    }

    Ok(annotations)
}

fn parse_range(range: &str) -> std::result::Result<(usize, usize), String> {
    let mut parts = range.split_whitespace();
    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected '<start> <end>', found '{range}'"));
    };

    let parse = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|e| format!("invalid offset '{value}': {e}"))
    };
    Ok((parse(start)?, parse(end)?))
}

/// Warn when the text stored with an annotation differs from the document
fn check_covered_text(document: &str, text: &str, annotations: &[EntityAnnotation]) {
    for annotation in annotations {
        let Some(expected) = annotation.covered_text.as_deref() else {
            continue;
        };
        // Merged fragments store only the fragment text
        let len = annotation.end.saturating_sub(annotation.start);
        if len == 0 || expected.chars().count() != len {
            continue;
        }
        let actual: String = text.chars().skip(annotation.start).take(len).collect();
        if actual != expected {
            log::warn!(
                "{document}: annotation {} covers \"{actual}\" but is stored as \"{expected}\"",
                annotation.id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_pair(dir: &Path, name: &str, text: &str, ann: &str) {
        fs::write(dir.join(format!("{name}.txt")), text).unwrap();
        fs::write(dir.join(format!("{name}.ann")), ann).unwrap();
    }

    #[test]
    fn test_parse_text_bound_annotations() {
        let source = "T1\tPERSON 0 4\tJohn\n\
                      R1\tLives Arg1:T1 Arg2:T2\n\
                      T2\tLOCATION 14 19\tParis\n\
                      #1\tAnnotatorNotes T1\tcheck\n\
                      A1\tNegated T1\n";
        let annotations = parse_annotations(source, Path::new("x.ann"), false).unwrap();
        assert_eq!(
            annotations,
            vec![
                EntityAnnotation::new("T1", "PERSON", 0, 4).with_covered_text("John"),
                EntityAnnotation::new("T2", "LOCATION", 14, 19).with_covered_text("Paris"),
            ]
        );
    }

    #[test]
    fn test_fragments_skipped_or_merged() {
        let source = "T1\tORG 0 3;8 12\tNew York\n";
        let skipped = parse_annotations(source, Path::new("x.ann"), false).unwrap();
        assert!(skipped.is_empty());

        let merged = parse_annotations(source, Path::new("x.ann"), true).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!((merged[0].start, merged[0].end), (0, 12));
    }

    #[test]
    fn test_malformed_line_reports_location() {
        let source = "T1\tPERSON 0 4\tJohn\nT2\tLOCATION x 19\tParis\n";
        let err = parse_annotations(source, Path::new("doc.ann"), false).unwrap_err();
        match err {
            EngineError::Format { path, line, reason } => {
                assert_eq!(path, PathBuf::from("doc.ann"));
                assert_eq!(line, 2);
                assert!(reason.contains("invalid offset 'x'"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let missing = parse_annotations("T1\tPERSON\n", Path::new("doc.ann"), false);
        assert!(matches!(missing, Err(EngineError::Format { line: 1, .. })));
    }

    #[test]
    fn test_open_directory_sorted_and_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("part2");
        fs::create_dir(&nested).unwrap();

        write_pair(dir.path(), "b", "Mary left.", "T1\tPERSON 0 4\tMary\n");
        write_pair(dir.path(), "a", "John stayed.", "T1\tPERSON 0 4\tJohn\n");
        write_pair(&nested, "c", "Nobody.", "");
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let stream = BratDocumentStream::open(dir.path()).unwrap();
        assert_eq!(stream.len(), 3);

        let documents: Vec<AnnotatedDocument> = stream.map(|doc| doc.unwrap()).collect();
        let ids: Vec<&str> = documents.iter().map(|doc| doc.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "part2/c"]);
        assert_eq!(documents[0].text, "John stayed.");
        assert_eq!(documents[0].annotations.len(), 1);
        assert!(documents[2].annotations.is_empty());
    }

    #[test]
    fn test_single_file_and_reset() {
        let dir = TempDir::new().unwrap();
        write_pair(dir.path(), "only", "Text here.", "T1\tX 0 4\tText\n");

        let mut stream = BratDocumentStream::open(dir.path().join("only.ann")).unwrap();
        assert_eq!(stream.next().unwrap().unwrap().id, "only");
        assert!(stream.next().is_none());

        stream.reset();
        assert!(stream.next().is_some());
    }

    #[test]
    fn test_missing_text_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("orphan.ann"), "T1\tX 0 1\tA\n").unwrap();

        let mut stream = BratDocumentStream::open(dir.path()).unwrap();
        match stream.next() {
            Some(Err(EngineError::Io { path, .. })) => {
                assert!(path.ends_with("orphan.txt"))
            }
            other => panic!("unexpected item: {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory() {
        let err = BratDocumentStream::open("/nonexistent/corpus").unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
