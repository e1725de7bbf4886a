//! Corpus pattern resolution using glob

use crate::error::CliError;
use annoseg_engine::BratDocumentStream;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve directories, `.ann` files and glob patterns to corpus paths
///
/// A path naming an existing directory or file is taken as is; anything
/// else is expanded as a glob pattern. Only directories and `.ann` files
/// are kept, minus paths inside another kept directory.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut corpora = Vec::new();

    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.exists() {
            if is_corpus(literal) {
                corpora.push(literal.to_path_buf());
            } else {
                log::warn!("{pattern}: not a directory or .ann file, skipped");
            }
            continue;
        }

        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if is_corpus(&path) {
                corpora.push(path);
            }
        }
    }

    if corpora.is_empty() {
        return Err(CliError::NoInput(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    corpora.sort();
    corpora.dedup();

    let mut kept: Vec<PathBuf> = Vec::with_capacity(corpora.len());
    for path in corpora {
        if let Some(dir) = kept
            .iter()
            .find(|dir| dir.is_dir() && path.starts_with(dir))
        {
            log::debug!(
                "{}: already read through {}",
                path.display(),
                dir.display()
            );
            continue;
        }
        kept.push(path);
    }

    Ok(kept)
}

fn is_corpus(path: &Path) -> bool {
    path.is_dir() || (path.is_file() && path.extension().is_some_and(|ext| ext == "ann"))
}

/// Open a document stream per corpus path
pub fn open_corpora(paths: &[PathBuf], merge_fragments: bool) -> Result<Vec<BratDocumentStream>> {
    paths
        .iter()
        .map(|path| {
            BratDocumentStream::open(path)
                .map(|stream| stream.merge_fragments(merge_fragments))
                .with_context(|| format!("Failed to open corpus {}", path.display()))
        })
        .collect()
}
