// ============================================================
// Layer 5 — Retrieval Layer
// ============================================================
// The keyword search core. No embeddings, no index: every
// query rescans the in-memory corpus.
//
//   question ──► scorer::search ──► Vec<ScoredMatch>
//                                        │
//                                        ▼
//                 SnippetExtractor::extract (per chapter)
//                   tries each SnippetStrategy in order:
//                     1. leading code block (fenced / def / class)
//                     2. structural pattern (def, class, for, if, while)
//                     3. best-scoring paragraph
//                     4. raw meaningful lines
//                     5. whole content
//
// Reference: Rust Book §13 (Iterators), §17 (Trait Objects)

/// Fixed vocabularies and bonus constants
pub mod markers;

/// Lexical chapter scoring and top-K ranking
pub mod scorer;

/// Regex-backed span finders used by the code tiers
pub mod patterns;

/// The individual snippet tiers
pub mod strategies;

/// The ordered tier chain
pub mod extractor;
