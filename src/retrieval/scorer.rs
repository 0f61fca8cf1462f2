// ============================================================
// Layer 5 — Lexical Scorer
// ============================================================
// Scores every chapter against the question and returns the
// top-K chapters with a positive score.
//
// Scoring (all matching on lowercased text, plain substrings,
// not word-boundary aware):
//
//   +10  per query token found in the title
//   +n   per query token, n = occurrences in the content
//   +50  the whole query appears verbatim in the content
//   +20  the content contains any code marker (once)
//   +15  per programming term in both query and content
//
// Query tokens are whitespace-separated words longer than
// two chars; "is", "a", "do" contribute nothing.
//
// Ranking is a stable sort, so ties keep corpus (filename) order.

use crate::domain::{document::Document, scored_match::ScoredMatch};
use crate::data::text::contains_any;
use crate::retrieval::markers::{
    CODE_CONTENT_BONUS, CODE_MARKERS, EXACT_PHRASE_BONUS, MIN_TOKEN_CHARS,
    PROGRAMMING_TERMS, PROGRAMMING_TERM_BONUS, TITLE_TOKEN_BONUS,
};

/// Lowercased query tokens that take part in scoring.
pub fn query_tokens(query_lower: &str) -> Vec<&str> {
    query_lower
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

/// Score one chapter; `query_lower` and `tokens` are computed once per query.
fn score_lowered(document: &Document, query_lower: &str, tokens: &[&str]) -> u32 {
    let content_lower = document.content.to_lowercase();
    let title_lower   = document.title.to_lowercase();
    let mut score     = 0u32;

    for token in tokens {
        if title_lower.contains(token) {
            score += TITLE_TOKEN_BONUS;
        }
        score += content_lower.matches(token).count() as u32;
    }

    if content_lower.contains(query_lower) {
        score += EXACT_PHRASE_BONUS;
    }

    if contains_any(&content_lower, CODE_MARKERS) {
        score += CODE_CONTENT_BONUS;
    }

    for term in PROGRAMMING_TERMS {
        if query_lower.contains(term) && content_lower.contains(term) {
            score += PROGRAMMING_TERM_BONUS;
        }
    }

    score
}

/// Rank the corpus against `query` and return at most `top_k`
/// matches with score > 0, best first.
pub fn search<'a>(corpus: &'a [Document], query: &str, top_k: usize) -> Vec<ScoredMatch<'a>> {
    let query_lower = query.to_lowercase();
    let tokens      = query_tokens(&query_lower);

    let mut matches: Vec<ScoredMatch<'a>> = corpus
        .iter()
        .map(|doc| ScoredMatch::new(doc, score_lowered(doc, &query_lower, &tokens)))
        .filter(|m| m.score > 0)
        .collect();

    // sort_by is stable: equal scores keep corpus order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(top_k);

    tracing::debug!(
        "Scored {} chapters, {} matched: {:?}",
        corpus.len(),
        matches.len(),
        matches.iter().map(|m| (m.document.id.as_str(), m.score)).collect::<Vec<_>>()
    );

    matches
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn score_document(d: &Document, query: &str) -> u32 {
        search(std::slice::from_ref(d), query, 1).first().map_or(0, |m| m.score)
    }

    fn doc(id: &str, title: &str, content: &str) -> Document {
        Document {
            id:      id.to_string(),
            title:   title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_short_tokens_do_not_score() {
        let corpus = vec![doc("a.txt", "Basics", "nothing relevant here at all")];
        assert!(search(&corpus, "ab cd", 5).is_empty());
    }

    #[test]
    fn test_short_query_still_gets_phrase_bonus() {
        // "is a" has no scoring tokens, but the exact-phrase check still applies
        let corpus = vec![doc("a.txt", "Basics", "this is a test")];
        let found  = search(&corpus, "is a", 5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, EXACT_PHRASE_BONUS);
    }

    #[test]
    fn test_exact_content_query_ranks_first() {
        let corpus = vec![
            doc("a.txt", "Other", "unrelated words entirely"),
            doc("b.txt", "Other", "Python Lists"),
        ];
        let found = search(&corpus, "python lists", 5);
        assert_eq!(found[0].document.id, "b.txt");
        // 1 + 1 per token, +50 phrase, +15 for "list"
        assert_eq!(found[0].score, 67);
        assert!(found[0].score >= EXACT_PHRASE_BONUS);
    }

    #[test]
    fn test_title_match_adds_ten() {
        let content = "Loops repeat work. A loop runs many times.";
        let corpus  = vec![
            doc("a.txt", "Other Things", content),
            doc("b.txt", "Loops", content),
        ];
        let found = search(&corpus, "loops", 5);
        assert_eq!(found[0].document.id, "b.txt");
        assert_eq!(found[0].score, found[1].score + TITLE_TOKEN_BONUS);
    }

    #[test]
    fn test_occurrences_are_substring_counts() {
        // "cat" inside "cats" and "catalog" both count
        let d = doc("a.txt", "X", "cat cats catalog");
        assert_eq!(score_document(&d, "cat zzz"), 3);
    }

    #[test]
    fn test_code_bonus_applies_once() {
        let d = doc("a.txt", "X", "def one(): pass\ndef two(): pass\nprint(1)");
        assert_eq!(score_document(&d, "zzz"), CODE_CONTENT_BONUS);
    }

    #[test]
    fn test_programming_term_bonus() {
        // "variable" in both query and content: 1 occurrence + 15
        let d = doc("a.txt", "X", "a variable holds a value");
        assert_eq!(score_document(&d, "variable"), 1 + PROGRAMMING_TERM_BONUS + EXACT_PHRASE_BONUS);
    }

    #[test]
    fn test_ties_keep_corpus_order_and_top_k() {
        let corpus = vec![
            doc("a.txt", "X", "python"),
            doc("b.txt", "X", "python"),
            doc("c.txt", "X", "python"),
        ];
        let found = search(&corpus, "python", 2);
        let ids: Vec<&str> = found.iter().map(|m| m.document.id.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_zero_scores_are_dropped() {
        let corpus = vec![doc("a.txt", "X", "nothing"), doc("b.txt", "X", "python here")];
        let found  = search(&corpus, "python", 5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].document.id, "b.txt");
    }

    #[test]
    fn test_scoring_is_case_insensitive() {
        let d = doc("a.txt", "DICTIONARY BASICS", "A DICTIONARY maps keys");
        // title +10, content 1, term bonus 15, phrase 50
        assert_eq!(score_document(&d, "Dictionary"), 10 + 1 + 15 + 50);
    }
}
