// ============================================================
// Layer 5 — Scoring Vocabularies and Constants
// ============================================================
// These values were tuned by hand against the Python Crash
// Course chapters. Changing any of them changes rankings.

/// Query tokens of this many chars or fewer are ignored by the scorer.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Per query token found in the chapter title.
pub const TITLE_TOKEN_BONUS: u32 = 10;

/// Whole (lowercased) query found verbatim in the chapter.
pub const EXACT_PHRASE_BONUS: u32 = 50;

/// Chapter contains at least one code marker (applied once).
pub const CODE_CONTENT_BONUS: u32 = 20;

/// Per programming term present in both query and chapter.
pub const PROGRAMMING_TERM_BONUS: u32 = 15;

/// Paragraph contains a code indicator (snippet paragraph tier).
pub const CODE_PARAGRAPH_BONUS: u32 = 20;

/// Paragraphs shorter than this (trimmed, in chars) are never picked.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// Preceding paragraphs kept as context for a leading code block.
pub const CODE_BLOCK_CONTEXT_PARAGRAPHS: usize = 3;

/// Preceding paragraphs kept as context for a structural match.
pub const STRUCTURAL_CONTEXT_PARAGRAPHS: usize = 1;

/// Substrings that mark a chapter as containing code (scorer).
pub const CODE_MARKERS: &[&str] = &[
    "def ", "class ", "import ", "print(", "if ", "for ", "while ", "return ",
];

/// Substrings that mark a paragraph or line as code (snippet tiers).
pub const CODE_INDICATORS: &[&str] = &[
    "def ", "class ", "import ", "print(", "if ", "for ", "while ",
];

/// Terms that earn a bonus when both the query and chapter mention them.
pub const PROGRAMMING_TERMS: &[&str] = &[
    "function", "variable", "loop", "condition", "string", "list", "dictionary", "module",
];

/// Lines starting with these are splitter artefacts, not chapter text.
pub const SKIPPED_LINE_PREFIXES: &[&str] = &["===", "Title:"];
