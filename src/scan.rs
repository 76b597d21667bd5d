//! Collection directory listing

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// List the documents directly inside `dir` whose file name contains
/// `extension`.
///
/// Paths are returned sorted so diagnostics come out in a stable order;
/// index ordering never depends on it.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Document directory not found: {}", dir.display());
    }

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .build();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if entry.depth() == 0 || !entry.path().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(extension) {
            documents.push(entry.into_path());
        }
    }

    documents.sort();
    Ok(documents)
}
