// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between the chapter files on disk and the
// in-memory strings the retrieval layer scans:
//
//   data/chapters/*.txt
//       │
//       ▼
//   ChapterLoader     → reads files, extracts titles, sorts
//       │
//       ▼
//   Vec<Document>     → the immutable corpus
//
//   text              → shared string helpers (paragraph
//                       splitting, whitespace collapsing,
//                       char-safe truncation)
//
// Reference: Rust Book §8 (Strings), §12 (I/O)

/// Loads `.txt` chapter files from a directory
pub mod loader;

/// String helpers shared by the scorer and snippet extractor
pub mod text;
