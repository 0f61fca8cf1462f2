// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define the core
// concepts of the book Q&A system.
//
// Rules for this layer:
//   - NO file I/O
//   - NO regex or scoring logic
//   - Only plain data types, error types, and traits
//
// The retrieval layer (scorer + snippet extractor) and the
// application layer (service + composer) are written against
// these types and never against each other's internals.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One chapter loaded from disk
pub mod document;

// A chapter paired with its relevance score for one query
pub mod scored_match;

// Typed errors surfaced by the query path
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
