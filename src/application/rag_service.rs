// ============================================================
// Layer 2 — RAG Service
// ============================================================
// The one object the outside world talks to. It owns the
// corpus and a readiness flag:
//
//   let mut rag = RagService::new(config)?;
//   if !rag.initialize() {
//       // no chapters: caller routes questions elsewhere
//   }
//   let text = rag.query("How do I create a function?");
//
// Lifecycle:
//   - initialize() loads the corpus once; it never panics and
//     reports failure as `false`
//   - after that the corpus is read-only, so a shared
//     `&RagService` can serve concurrent queries
//   - answer() returns a typed Result; respond() and query()
//     render every outcome (including failures) as text

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::application::{composer::ResponseComposer, config::RagConfig};
use crate::data::loader::ChapterLoader;
use crate::domain::{document::Document, error::RagError, traits::DocumentSource};
use crate::retrieval::{extractor::SnippetExtractor, scorer};

/// Returned by query() when initialize() has not succeeded.
pub const NOT_INITIALIZED_MESSAGE: &str = "RAG system not initialized. Please try again.";

/// Model name reported in the answer envelope.
pub const MODEL_NAME: &str = "simple_rag";

/// Source tag reported in the answer envelope.
pub const SOURCE_TAG: &str = "book_rag";

/// A composed answer plus the tags the HTTP layer reports with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RagAnswer {
    pub answer: String,
    pub model:  String,
    pub source: String,
}

impl RagAnswer {
    fn new(answer: String) -> Self {
        Self {
            answer,
            model:  MODEL_NAME.to_string(),
            source: SOURCE_TAG.to_string(),
        }
    }
}

pub struct RagService {
    config:    RagConfig,
    source:    Box<dyn DocumentSource + Send + Sync>,
    extractor: SnippetExtractor,
    corpus:    Vec<Document>,
    ready:     bool,
}

impl RagService {
    /// A service reading chapters from `config.chapters_dir`.
    pub fn new(config: RagConfig) -> Result<Self, RagError> {
        let loader = ChapterLoader::new(&config.chapters_dir);
        Self::with_source(config, Box::new(loader))
    }

    /// A service reading chapters from any DocumentSource.
    pub fn with_source(
        config: RagConfig,
        source: Box<dyn DocumentSource + Send + Sync>,
    ) -> Result<Self, RagError> {
        Ok(Self::with_extractor(config, source, SnippetExtractor::new()?))
    }

    /// A service with a custom snippet tier chain.
    pub fn with_extractor(
        config: RagConfig,
        source: Box<dyn DocumentSource + Send + Sync>,
        extractor: SnippetExtractor,
    ) -> Self {
        Self {
            config,
            source,
            extractor,
            corpus: Vec::new(),
            ready:  false,
        }
    }

    /// Load the corpus. Returns false (and stays not-ready) when the
    /// source is missing, unreadable or empty.
    pub fn initialize(&mut self) -> bool {
        tracing::info!("Loading chapters...");

        let docs = match self.source.load_all() {
            Ok(docs) => docs,
            Err(e) => {
                tracing::error!("Error initializing RAG system: {e:#}");
                self.corpus.clear();
                self.ready = false;
                return false;
            }
        };

        if docs.is_empty() {
            tracing::error!("No chapters loaded");
            self.corpus.clear();
            self.ready = false;
            return false;
        }

        self.corpus = docs;
        self.ready  = true;
        tracing::info!("RAG system initialized with {} chapters", self.corpus.len());
        true
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }

    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Answer a question, classifying failures.
    pub fn answer(&self, question: &str) -> Result<RagAnswer, RagError> {
        if !self.ready {
            return Err(RagError::NotInitialized);
        }

        tracing::info!("Processing question: {}...", question.chars().take(50).collect::<String>());

        // A panic anywhere in scoring or extraction becomes an error value
        let text = panic::catch_unwind(AssertUnwindSafe(|| self.compose(question)))
            .map_err(|payload| RagError::Internal(panic_message(payload.as_ref())))?;

        Ok(RagAnswer::new(text))
    }

    /// Answer a question as an envelope. Never panics; failures are
    /// rendered as messages in the answer text.
    pub fn respond(&self, question: &str) -> RagAnswer {
        match self.answer(question) {
            Ok(answer) => answer,
            Err(RagError::NotInitialized) => RagAnswer::new(NOT_INITIALIZED_MESSAGE.to_string()),
            Err(e) => {
                tracing::error!("Error processing query: {e}");
                RagAnswer::new(format!("Error processing your question: {e}"))
            }
        }
    }

    /// Answer a question as plain text.
    pub fn query(&self, question: &str) -> String {
        self.respond(question).answer
    }

    fn compose(&self, question: &str) -> String {
        let matches = scorer::search(&self.corpus, question, self.config.top_k);
        ResponseComposer::new(&self.extractor, &self.config).compose(question, &matches)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic while composing the answer".to_string()
    }
}
