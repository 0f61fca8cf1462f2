// ============================================================
// Layer 3 — Query Errors
// ============================================================
// Failures on the question-answering path are typed here so
// the service can classify them. The outer boundary
// (RagService::query) renders every variant into a string;
// nothing in this enum ever reaches the host as a panic.

use thiserror::Error;

/// Errors produced by the retrieval service.
#[derive(Debug, Error)]
pub enum RagError {
    /// A question arrived before a successful initialize().
    #[error("RAG system not initialized")]
    NotInitialized,

    /// One of the built-in snippet patterns failed to compile.
    #[error("invalid snippet pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Scoring, extraction or composition faulted unexpectedly.
    #[error("{0}")]
    Internal(String),
}
