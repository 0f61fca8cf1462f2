// ============================================================
// Layer 2 — RAG Configuration
// ============================================================
// Every tunable of the question-answering workflow.
// Serialisable so it can be read from a JSON file; any field
// missing from the file keeps its default.
//
// Example config.json:
//   {
//     "chapters_dir": "data/chapters",
//     "top_k": 5,
//     "book_title": "Python Crash Course"
//   }

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Directory holding the chapter `.txt` files
    pub chapters_dir: String,

    /// How many ranked chapters a query considers
    pub top_k: usize,

    /// Max chars of the main chapter's snippet
    pub main_snippet_len: usize,

    /// Max chars extracted from each secondary chapter
    pub secondary_snippet_len: usize,

    /// Chars of each secondary snippet shown in the answer
    pub secondary_display_len: usize,

    /// How many secondary chapters are listed
    pub max_secondary: usize,

    /// Book name used in answer headers and attribution
    pub book_title: String,

    /// Book author used in the attribution line
    pub book_author: String,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            chapters_dir:          "data/chapters".to_string(),
            top_k:                 5,
            main_snippet_len:      1500,
            secondary_snippet_len: 300,
            secondary_display_len: 200,
            max_secondary:         3,
            book_title:            "Python Crash Course".to_string(),
            book_author:           "Eric Matthes".to_string(),
        }
    }
}
