// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to answer a question:
//
//   RagService::query
//       │
//       ├─► retrieval::scorer::search      (rank chapters)
//       └─► ResponseComposer::compose      (snippets + framing)
//
// No printing here (that's Layer 1) and no direct file reads
// (that's Layer 4 and Layer 6).
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// Tunables for the whole workflow
pub mod config;

/// Builds the answer text from ranked chapters
pub mod composer;

/// The service object: corpus, readiness, query boundary
pub mod rag_service;
