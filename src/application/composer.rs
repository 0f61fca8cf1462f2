// ============================================================
// Layer 2 — Response Composer
// ============================================================
// Turns the ranked chapters into the answer text:
//
//   Based on the <book> book, here's what I found:
//
//   📖 Main Chapter: <title>
//
//   💻 Complete Code Example:      ← code questions
//   📝 Detailed Explanation:       ← everything else
//   <snippet of the top chapter, up to 1500 chars>
//
//   💡 This information comes from the <book> book by <author>.
//
//   🔍 Additional Examples from Other Chapters:   ← ranks 2..4
//   📖 Chapter 2: <title>
//   📝 <first 200 chars of a 300-char snippet>...
//
//   💡 Usage Tips: ...             ← code questions only

use std::fmt::Write;

use crate::application::config::RagConfig;
use crate::domain::scored_match::ScoredMatch;
use crate::data::text::take_chars;
use crate::retrieval::extractor::SnippetExtractor;

/// A question mentioning any of these (case-insensitive substring)
/// is treated as a request for code.
pub const CODE_KEYWORDS: &[&str] = &[
    "function", "def", "class", "code", "example", "syntax", "program", "method", "loop", "variable",
];

const USAGE_TIPS: &[&str] = &[
    "Copy the code examples and run them in your Python environment",
    "Experiment with the code by modifying parameters",
    "Check the book for more detailed explanations",
];

/// Does the question ask for code rather than an explanation?
pub fn is_code_question(question: &str) -> bool {
    let lower = question.to_lowercase();
    CODE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Builds answer text from ranked matches.
pub struct ResponseComposer<'a> {
    extractor: &'a SnippetExtractor,
    config:    &'a RagConfig,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(extractor: &'a SnippetExtractor, config: &'a RagConfig) -> Self {
        Self { extractor, config }
    }

    /// The fixed reply when no chapter scored above zero.
    pub fn not_found_message(&self) -> String {
        format!(
            "I couldn't find relevant information about that in the {} book.",
            self.config.book_title
        )
    }

    /// Compose the full answer for `question` from `matches`
    /// (best first).
    pub fn compose(&self, question: &str, matches: &[ScoredMatch<'_>]) -> String {
        let Some((best, others)) = matches.split_first() else {
            return self.not_found_message();
        };

        let code_question = is_code_question(question);
        let snippet       = self.extractor.extract(best.content(), question, self.config.main_snippet_len);
        let label         = if code_question {
            "💻 Complete Code Example:"
        } else {
            "📝 Detailed Explanation:"
        };

        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "Based on the {book} book, here's what I found:\n\n\
             📖 Main Chapter: {title}\n\n\
             {label}\n{snippet}\n\n\
             💡 This information comes from the {book} book by {author}.\n\n",
            book   = self.config.book_title,
            author = self.config.book_author,
            title  = best.title(),
        );

        if !others.is_empty() {
            out.push_str("🔍 Additional Examples from Other Chapters:\n");
            for (rank, m) in others.iter().take(self.config.max_secondary).enumerate() {
                let extra = self.extractor.extract(m.content(), question, self.config.secondary_snippet_len);
                let _ = write!(
                    out,
                    "\n📖 Chapter {}: {}\n📝 {}...\n",
                    rank + 2,
                    m.title(),
                    take_chars(&extra, self.config.secondary_display_len),
                );
            }
        }

        if code_question {
            out.push_str("\n💡 Usage Tips:\n");
            for tip in USAGE_TIPS {
                let _ = writeln!(out, "• {tip}");
            }
        }

        out
    }
}
