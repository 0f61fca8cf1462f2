// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single chapter loaded from disk: the source
// filename, the declared chapter title, and the full text.
//
// Documents are immutable once loaded. The corpus is simply
// a Vec<Document> sorted by filename.
//
// Reference: Rust Book §5 (Structs and Methods)

/// Title used when a chapter does not declare one.
pub const UNKNOWN_TITLE: &str = "Unknown Chapter";

/// Marker prefix of the title line written by the chapter splitter.
pub const TITLE_MARKER: &str = "Title:";

/// Only this many leading lines are scanned for the title marker.
pub const TITLE_SCAN_LINES: usize = 5;

/// A chapter of the book, as loaded from a plain-text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The source filename, e.g. `chapter_03.txt`
    pub id: String,

    /// The chapter title from the `Title:` line, or "Unknown Chapter"
    pub title: String,

    /// The full chapter text, exactly as stored
    pub content: String,
}

impl Document {
    /// Build a Document from a filename and raw text,
    /// extracting the title from the first few lines.
    ///
    /// Example:
    ///   let doc = Document::from_text("b.txt", "Title: Loops\n...");
    ///   assert_eq!(doc.title, "Loops");
    pub fn from_text(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let title   = extract_title(&content);
        Self {
            id: id.into(),
            title,
            content,
        }
    }
}

/// Return the value of the first `Title:` line among the first
/// five lines of `content`, trimmed, or "Unknown Chapter".
pub fn extract_title(content: &str) -> String {
    content
        .split('\n')
        .take(TITLE_SCAN_LINES)
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}
