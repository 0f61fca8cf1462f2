// ============================================================
// Layer 4 — Text Helpers
// ============================================================
// Small string utilities shared by the scorer, the snippet
// tiers and the composer.
//
// All lengths here are counted in chars, not bytes.
// Truncation never splits a multi-byte character.
//
// Reference: Rust Book §8.2 (Storing UTF-8 Encoded Text)

/// Marker appended when a snippet is cut short.
pub const ELLIPSIS: &str = "...";

/// Paragraph separator: one blank line.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Number of chars (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `n` chars of `s` (all of `s` if it is shorter).
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Cut `s` to `max_length` chars and append "..." if anything was cut.
pub fn truncate_with_ellipsis(s: &str, max_length: usize) -> String {
    if char_len(s) > max_length {
        format!("{}{}", take_chars(s, max_length), ELLIPSIS)
    } else {
        s.to_string()
    }
}

/// Trim `s` and replace every run of whitespace with one space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into blank-line-delimited paragraphs (untrimmed).
pub fn paragraphs(s: &str) -> std::str::Split<'_, &'static str> {
    s.split(PARAGRAPH_BREAK)
}

/// Does `haystack` contain any of `needles` as a substring?
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
