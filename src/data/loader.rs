// ============================================================
// Layer 4 — Chapter Loader
// ============================================================
// Loads the chapter files produced by the offline PDF splitter.
//
// Expected layout:
//   data/chapters/
//     chapter_01.txt   ← "Title: Getting Started\n..."
//     chapter_02.txt   ← "Title: Variables and Simple Data Types\n..."
//     ...
//
// Rules:
//   - Only regular `*.txt` files directly inside the directory
//     (no recursion, hidden files skipped)
//   - Files are read in filename order so the corpus is
//     reproducible between runs
//   - A file or directory entry that cannot be read
//     (permissions, invalid UTF-8) is logged and skipped; the
//     rest of the batch still loads
//   - A missing directory gives an empty corpus, not an error
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads all `.txt` chapters from a given directory.
pub struct ChapterLoader {
    /// Directory containing the chapter files
    dir: PathBuf,
}

impl ChapterLoader {
    /// Create a new ChapterLoader pointed at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Collect the chapter file paths, sorted by filename.
    fn chapter_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?;

        Ok(select_chapter_paths(entries.map(|entry| entry.map(|e| e.path()))))
    }
}

/// Keep the chapter files among the listed paths, sorted by filename.
/// An entry that cannot be listed is logged and skipped.
fn select_chapter_paths(entries: impl IntoIterator<Item = io::Result<PathBuf>>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for entry in entries {
        match entry {
            Ok(path) if is_chapter_file(&path) => paths.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!("Skipping unreadable directory entry: {}", e),
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    paths
}

impl DocumentSource for ChapterLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        if !self.dir.exists() {
            tracing::warn!(
                "Chapters directory '{}' does not exist, returning empty corpus",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let paths = self.chapter_paths()?;
        tracing::info!("Found {} chapter files", paths.len());

        let mut docs = Vec::with_capacity(paths.len());
        for path in paths {
            match load_single_chapter(&path) {
                Ok(doc) => {
                    tracing::debug!(
                        "Loaded: {} '{}' ({} chars)",
                        doc.id,
                        doc.title,
                        doc.content.len()
                    );
                    docs.push(doc);
                }
                Err(e) => {
                    tracing::warn!("Error reading '{}': {:#}", path.display(), e);
                }
            }
        }

        tracing::info!("Loaded {} chapters", docs.len());
        Ok(docs)
    }
}

/// A chapter file is a regular, non-hidden file ending in `.txt`.
fn is_chapter_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));

    !hidden
        && path.is_file()
        && path.extension().and_then(|e| e.to_str()) == Some("txt")
}

/// Read one chapter file into a Document.
fn load_single_chapter(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let id = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::from_text(id, content))
}
