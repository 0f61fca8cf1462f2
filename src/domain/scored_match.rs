// ============================================================
// Layer 3 — ScoredMatch Domain Type
// ============================================================
// A chapter paired with its relevance score for one query.
// Produced by the lexical scorer, consumed by the composer,
// then dropped. Borrows the chapter from the corpus instead
// of cloning its text.

use crate::domain::document::Document;

/// A corpus document together with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    /// The matched chapter
    pub document: &'a Document,

    /// Relevance score; always > 0 for returned matches
    pub score: u32,
}

impl<'a> ScoredMatch<'a> {
    pub fn new(document: &'a Document, score: u32) -> Self {
        Self { document, score }
    }

    /// Title of the matched chapter
    pub fn title(&self) -> &'a str {
        &self.document.title
    }

    /// Full text of the matched chapter
    pub fn content(&self) -> &'a str {
        &self.document.content
    }
}
