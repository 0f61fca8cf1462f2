// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams other layers plug into:
//
//   DocumentSource   → ChapterLoader reads a chapter directory;
//                      tests supply in-memory corpora
//   SnippetStrategy  → one tier of the snippet fallback chain;
//                      the extractor tries them in order
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load the chapter corpus.
pub trait DocumentSource {
    /// Load all available documents, sorted by identifier.
    /// A missing source yields an empty Vec, not an error.
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── SnippetStrategy ──────────────────────────────────────────────────────────
/// One tier of snippet extraction.
///
/// Each tier is a pure function of its inputs: it either produces a
/// finished (already truncated) snippet or declines with `None`,
/// letting the next tier try.
pub trait SnippetStrategy: Send + Sync {
    /// Short name used in debug logs
    fn name(&self) -> &'static str;

    /// Attempt to build a snippet of at most `max_length` characters
    /// (plus a truncation marker) from `content`.
    fn attempt(&self, content: &str, query: &str, max_length: usize) -> Option<String>;
}
