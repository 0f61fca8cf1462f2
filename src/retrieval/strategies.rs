// ============================================================
// Layer 5 — Snippet Tiers
// ============================================================
// Each tier implements SnippetStrategy and is tried in this
// order by the SnippetExtractor:
//
//   LeadingCodeBlock   → the first fenced block, else the first
//                        `def` block, else the first class..def
//                        span, with up to 3 preceding paragraphs
//                        (a fenced block is kept even with none)
//   StructuralPattern  → first of def / class / for / if / while
//                        that has text before it, with the one
//                        preceding paragraph
//   BestParagraph      → paragraph with the most query-token hits
//   MeaningfulLines    → raw lines minus splitter artefacts
//   WholeContent       → the trimmed chapter text itself
//
// Every tier truncates its own output to `max_length` chars
// (plus "...").

use crate::data::text::{
    char_len, collapse_whitespace, contains_any, paragraphs, truncate_with_ellipsis,
    PARAGRAPH_BREAK,
};
use crate::domain::traits::SnippetStrategy;
use crate::retrieval::markers::{
    CODE_BLOCK_CONTEXT_PARAGRAPHS, CODE_INDICATORS, CODE_PARAGRAPH_BONUS,
    MIN_PARAGRAPH_CHARS, SKIPPED_LINE_PREFIXES, STRUCTURAL_CONTEXT_PARAGRAPHS,
};
use crate::retrieval::patterns::{Span, SpanPattern};

pub const COMPLETE_CODE_LABEL: &str = "💻 Complete Code Example:";
pub const CODE_LABEL: &str = "💻 Code Example:";
pub const CONTAINS_CODE_NOTICE: &str = "💻 This chapter contains code examples!";

/// The last `count` paragraphs of the text before `span`, joined by
/// blank lines. `None` when the span opens the chapter or only
/// whitespace precedes it.
fn preceding_context(content: &str, span: &Span<'_>, count: usize) -> Option<String> {
    if span.start == 0 {
        return None;
    }

    let before = content[..span.start].trim();
    if before.is_empty() {
        return None;
    }

    let parts: Vec<&str> = paragraphs(before).collect();
    let tail = &parts[parts.len().saturating_sub(count)..];
    Some(tail.join(PARAGRAPH_BREAK).trim().to_string())
}

fn labeled(context: &str, label: &str, block: &str, max_length: usize) -> String {
    truncate_with_ellipsis(&format!("{context}\n\n{label}\n{block}"), max_length)
}

// ─── LeadingCodeBlock ─────────────────────────────────────────────────────────
/// Picks ONE block: the first fenced block if the chapter has any,
/// otherwise the first function definition, otherwise the first
/// class..def span. Later finders are not consulted when an earlier
/// one found something.
///
/// A fenced block that opens the chapter is returned with the label
/// and no context. A `def` or class block with no preceding text
/// makes this tier decline.
pub struct LeadingCodeBlock {
    fenced:      SpanPattern,
    definitions: Vec<SpanPattern>,
}

impl LeadingCodeBlock {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            fenced:      SpanPattern::fenced_block()?,
            definitions: vec![SpanPattern::function_def()?, SpanPattern::class_to_def()?],
        })
    }
}

impl SnippetStrategy for LeadingCodeBlock {
    fn name(&self) -> &'static str {
        "leading code block"
    }

    fn attempt(&self, content: &str, _query: &str, max_length: usize) -> Option<String> {
        if let Some(span) = self.fenced.find(content) {
            let snippet = match preceding_context(content, &span, CODE_BLOCK_CONTEXT_PARAGRAPHS) {
                Some(context) => labeled(&context, COMPLETE_CODE_LABEL, span.text, max_length),
                None => truncate_with_ellipsis(
                    &format!("{COMPLETE_CODE_LABEL}\n{}", span.text),
                    max_length,
                ),
            };
            return Some(snippet);
        }

        let span    = self.definitions.iter().find_map(|p| p.find(content))?;
        let context = preceding_context(content, &span, CODE_BLOCK_CONTEXT_PARAGRAPHS)?;
        Some(labeled(&context, COMPLETE_CODE_LABEL, span.text, max_length))
    }
}

// ─── StructuralPattern ────────────────────────────────────────────────────────
/// Tries each pattern's first match in turn and keeps the first one
/// that has text before it.
pub struct StructuralPattern {
    patterns: Vec<SpanPattern>,
}

impl StructuralPattern {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: vec![
                SpanPattern::function_def()?,
                SpanPattern::class_to_def()?,
                SpanPattern::for_loop()?,
                SpanPattern::if_statement()?,
                SpanPattern::while_loop()?,
            ],
        })
    }
}

impl SnippetStrategy for StructuralPattern {
    fn name(&self) -> &'static str {
        "structural pattern"
    }

    fn attempt(&self, content: &str, _query: &str, max_length: usize) -> Option<String> {
        self.patterns.iter().find_map(|pattern| {
            let span    = pattern.find(content)?;
            let context = preceding_context(content, &span, STRUCTURAL_CONTEXT_PARAGRAPHS)?;
            tracing::trace!("Structural match: {}", pattern.name());
            Some(labeled(&context, CODE_LABEL, span.text, max_length))
        })
    }
}

// ─── BestParagraph ────────────────────────────────────────────────────────────
/// Scores each paragraph of at least 50 chars by how often the query
/// words occur in it (+20 if it looks like code). Only a paragraph
/// that beats the running best (starting at 0) is kept; ties go to
/// the earlier paragraph.
pub struct BestParagraph;

impl BestParagraph {
    fn score(paragraph: &str, words: &[&str]) -> u32 {
        let lower = paragraph.to_lowercase();
        let mut score: u32 = words
            .iter()
            .map(|w| lower.matches(w).count() as u32)
            .sum();

        if contains_any(paragraph, CODE_INDICATORS) {
            score += CODE_PARAGRAPH_BONUS;
        }
        score
    }
}

impl SnippetStrategy for BestParagraph {
    fn name(&self) -> &'static str {
        "best paragraph"
    }

    fn attempt(&self, content: &str, query: &str, max_length: usize) -> Option<String> {
        // Unlike the scorer, short words are not filtered out here
        let query_lower      = query.to_lowercase();
        let words: Vec<&str> = query_lower.split_whitespace().collect();

        let mut best: Option<&str> = None;
        let mut best_score         = 0u32;

        for paragraph in paragraphs(content) {
            if char_len(paragraph.trim()) < MIN_PARAGRAPH_CHARS {
                continue;
            }

            let score = Self::score(paragraph, &words);
            if score > best_score {
                best_score = score;
                best       = Some(paragraph);
            }
        }

        best.map(|p| truncate_with_ellipsis(&collapse_whitespace(p), max_length))
    }
}

// ─── MeaningfulLines ──────────────────────────────────────────────────────────
/// Trimmed non-empty lines, skipping `===` banners and the title
/// line, until the collected text passes `max_length`. Appends a
/// notice when any collected line looks like code.
pub struct MeaningfulLines;

impl SnippetStrategy for MeaningfulLines {
    fn name(&self) -> &'static str {
        "meaningful lines"
    }

    fn attempt(&self, content: &str, _query: &str, max_length: usize) -> Option<String> {
        let mut lines: Vec<&str> = Vec::new();
        let mut joined_len       = 0usize;
        let mut code_found       = false;

        for line in content.split('\n').map(str::trim) {
            if line.is_empty() || SKIPPED_LINE_PREFIXES.iter().any(|p| line.starts_with(p)) {
                continue;
            }

            // +1 for the newline joining this line to the previous one
            joined_len += char_len(line) + usize::from(!lines.is_empty());
            lines.push(line);

            if contains_any(line, CODE_INDICATORS) {
                code_found = true;
            }

            if joined_len > max_length {
                break;
            }
        }

        if lines.is_empty() {
            return None;
        }

        let mut result = truncate_with_ellipsis(&lines.join("\n"), max_length);
        if code_found {
            result.push_str("\n\n");
            result.push_str(CONTAINS_CODE_NOTICE);
        }
        Some(result)
    }
}

// ─── WholeContent ─────────────────────────────────────────────────────────────
/// Last resort for chapters made only of banners and title lines.
pub struct WholeContent;

impl SnippetStrategy for WholeContent {
    fn name(&self) -> &'static str {
        "whole content"
    }

    fn attempt(&self, content: &str, _query: &str, max_length: usize) -> Option<String> {
        if content.is_empty() {
            return None;
        }

        let trimmed = content.trim();
        let text    = if trimmed.is_empty() { content } else { trimmed };
        Some(truncate_with_ellipsis(text, max_length))
    }
}
