// ============================================================
// Layer 5 — Snippet Extractor
// ============================================================
// Runs the snippet tiers in priority order and returns the
// first snippet produced. The chain always ends with a tier
// that succeeds on any non-empty text, so a non-empty chapter
// always yields a non-empty snippet.

use crate::domain::{error::RagError, traits::SnippetStrategy};
use crate::retrieval::strategies::{
    BestParagraph, LeadingCodeBlock, MeaningfulLines, StructuralPattern, WholeContent,
};

/// The ordered chain of snippet tiers.
pub struct SnippetExtractor {
    strategies: Vec<Box<dyn SnippetStrategy>>,
}

impl SnippetExtractor {
    /// Build the standard chain. Fails only if a built-in pattern
    /// does not compile.
    pub fn new() -> Result<Self, RagError> {
        Ok(Self::with_strategies(vec![
            Box::new(LeadingCodeBlock::new()?),
            Box::new(StructuralPattern::new()?),
            Box::new(BestParagraph),
            Box::new(MeaningfulLines),
            Box::new(WholeContent),
        ]))
    }

    /// Build a chain from custom tiers, tried in the given order.
    pub fn with_strategies(strategies: Vec<Box<dyn SnippetStrategy>>) -> Self {
        Self { strategies }
    }

    /// The most relevant excerpt of `content` for `query`, at most
    /// `max_length` chars plus a truncation marker. Empty only when
    /// `content` is empty.
    pub fn extract(&self, content: &str, query: &str, max_length: usize) -> String {
        for strategy in &self.strategies {
            if let Some(snippet) = strategy.attempt(content, query, max_length) {
                tracing::debug!(
                    "Snippet from tier '{}' ({} chars)",
                    strategy.name(),
                    snippet.chars().count()
                );
                return snippet;
            }
        }
        String::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::strategies::{CODE_LABEL, COMPLETE_CODE_LABEL, CONTAINS_CODE_NOTICE};

    fn extractor() -> SnippetExtractor {
        SnippetExtractor::new().unwrap()
    }

    #[test]
    fn test_tier_fenced_block() {
        let block   = "```python\nmessage = \"Hello\"\nprint(message)\n```";
        let content = format!("Title: Variables\n\nA first program.\n\nHere it is:\n\n{block}\n\nThe end.");
        let out     = extractor().extract(&content, "print a message", 1500);
        assert!(out.contains(block));
        assert!(out.contains(COMPLETE_CODE_LABEL));
        assert!(out.starts_with("Title: Variables\n\nA first program.\n\nHere it is:"));
    }

    #[test]
    fn test_fenced_block_opening_chapter_is_kept() {
        let block   = "```\nprint('hi')\n```";
        let content = format!("{block}\n\nThis paragraph explains the variables in detail so it is long enough.");
        let out     = extractor().extract(&content, "variables", 1500);
        assert_eq!(out, format!("{COMPLETE_CODE_LABEL}\n{block}"));
    }

    #[test]
    fn test_fenced_block_truncated_to_max_length() {
        let content = format!("Intro.\n\n```\n{}\n```", "x".repeat(200));
        let out     = extractor().extract(&content, "", 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_tier_function_definition() {
        let content = "Functions let you reuse code.\n\ndef greet(name):\n    print(name)\n\nMore text.";
        let out     = extractor().extract(content, "function", 1500);
        assert_eq!(
            out,
            format!("Functions let you reuse code.\n\n{COMPLETE_CODE_LABEL}\ndef greet(name):\n    print(name)\n")
        );
    }

    #[test]
    fn test_tier_structural_pattern() {
        let content = "Looping over a list is common.\n\nfor name in names:\n    print(name)\n\nThat prints every name.";
        let out     = extractor().extract(content, "loop", 1500);
        assert_eq!(
            out,
            format!("Looping over a list is common.\n\n{CODE_LABEL}\nfor name in names:\n    print(name)\n")
        );
    }

    #[test]
    fn test_tier_best_paragraph() {
        let content = "Python is a popular programming language used by developers worldwide.\n\n\
                       Variables store values that your program can use later when it runs.";
        let out = extractor().extract(content, "variables store values", 1500);
        assert_eq!(out, "Variables store values that your program can use later when it runs.");
    }

    #[test]
    fn test_tier_meaningful_lines() {
        let content = "Title: Basics\n=== Chapter 1 ===\nShort line one.\nShort line two.";
        let out     = extractor().extract(content, "zebra", 1500);
        assert_eq!(out, "Short line one.\nShort line two.");
    }

    #[test]
    fn test_tier_meaningful_lines_with_code() {
        let out = extractor().extract("x = 1\nprint(x)", "anything", 1500);
        assert!(out.ends_with(CONTAINS_CODE_NOTICE));
    }

    #[test]
    fn test_non_empty_for_artefact_only_chapter() {
        let out = extractor().extract("Title: Empty Chapter\n", "anything", 1500);
        assert_eq!(out, "Title: Empty Chapter");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(extractor().extract("", "anything", 1500), "");
    }

    #[test]
    fn test_custom_chain_order() {
        let chain = SnippetExtractor::with_strategies(vec![Box::new(MeaningfulLines)]);
        assert_eq!(chain.extract("a\n\nb", "", 100), "a\nb");
    }
}
