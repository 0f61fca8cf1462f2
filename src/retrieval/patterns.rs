// ============================================================
// Layer 5 — Span Patterns
// ============================================================
// Finds code-like spans in chapter text. Each pattern is a
// header regex plus a rule for where the span stops:
//
//   Matched           → the span is exactly the regex match
//                       (fenced blocks, "class X ... def")
//   ToUnindentedLine  → the span runs from the header to just
//                       before the next line that starts with a
//                       non-whitespace char, or to end of text
//
// The `regex` crate has no lookahead, so the second rule is a
// separate scan for "\n<non-space>" starting after the header.
//
// All patterns are case-sensitive and run on the stored text.
//
// Reference: regex crate docs (Regex::find_at)

use regex::Regex;

/// Start of the next unindented line.
const UNINDENTED_LINE: &str = r"\n\S";

/// A located span: byte offset of its first char and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'c> {
    pub start: usize,
    pub text:  &'c str,
}

/// Where a span ends once its header has matched.
#[derive(Debug, Clone)]
enum Extent {
    Matched,
    ToUnindentedLine(Regex),
}

/// A named header pattern with its extent rule.
#[derive(Debug, Clone)]
pub struct SpanPattern {
    name:   &'static str,
    header: Regex,
    extent: Extent,
}

impl SpanPattern {
    fn matched(name: &'static str, header: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            header: Regex::new(header)?,
            extent: Extent::Matched,
        })
    }

    fn to_unindented_line(name: &'static str, header: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            header: Regex::new(header)?,
            extent: Extent::ToUnindentedLine(Regex::new(UNINDENTED_LINE)?),
        })
    }

    /// ```` ```...``` ````: the shortest fenced block
    pub fn fenced_block() -> Result<Self, regex::Error> {
        Self::matched("fenced block", r"(?s)```.*?```")
    }

    /// `def name(args):` and its indented body
    pub fn function_def() -> Result<Self, regex::Error> {
        Self::to_unindented_line("function definition", r"def\s+\w+\([^)]*\):")
    }

    /// `class Name` through the next `def`
    pub fn class_to_def() -> Result<Self, regex::Error> {
        Self::matched("class definition", r"(?s)class\s+\w+.*?def")
    }

    /// `for item in items:` and its indented body
    pub fn for_loop() -> Result<Self, regex::Error> {
        Self::to_unindented_line("for loop", r"(?s)for\s+\w+\s+in\s+.*?:")
    }

    /// `if condition:` and its indented body
    pub fn if_statement() -> Result<Self, regex::Error> {
        Self::to_unindented_line("if statement", r"(?s)if\s+.*?:")
    }

    /// `while condition:` and its indented body
    pub fn while_loop() -> Result<Self, regex::Error> {
        Self::to_unindented_line("while loop", r"(?s)while\s+.*?:")
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The first span of this kind in `content`, if any.
    pub fn find<'c>(&self, content: &'c str) -> Option<Span<'c>> {
        let header = self.header.find(content)?;

        let end = match &self.extent {
            Extent::Matched => header.end(),
            Extent::ToUnindentedLine(line_start) => line_start
                .find_at(content, header.end())
                .map_or(content.len(), |m| m.start()),
        };

        Some(Span {
            start: header.start(),
            text:  &content[header.start()..end],
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_is_shortest() {
        let p    = SpanPattern::fenced_block().unwrap();
        let text = "intro\n```\na = 1\n```\nmiddle\n```\nb = 2\n```";
        let span = p.find(text).unwrap();
        assert_eq!(span.text, "```\na = 1\n```");
        assert_eq!(span.start, 6);
    }

    #[test]
    fn test_function_def_stops_at_unindented_line() {
        let p    = SpanPattern::function_def().unwrap();
        let text = "Text.\ndef greet(name):\n    print(name)\n\n    return name\nAfter.";
        let span = p.find(text).unwrap();
        assert_eq!(span.text, "def greet(name):\n    print(name)\n\n    return name");
    }

    #[test]
    fn test_function_def_runs_to_end_of_text() {
        let p    = SpanPattern::function_def().unwrap();
        let text = "def f():\n    pass\n";
        assert_eq!(p.find(text).unwrap().text, "def f():\n    pass\n");
    }

    #[test]
    fn test_class_to_def_includes_def_keyword() {
        let p    = SpanPattern::class_to_def().unwrap();
        let text = "class Dog:\n    \"\"\"A dog.\"\"\"\n    def sit(self):";
        assert_eq!(p.find(text).unwrap().text, "class Dog:\n    \"\"\"A dog.\"\"\"\n    def");
    }

    #[test]
    fn test_class_without_def_does_not_match() {
        let p = SpanPattern::class_to_def().unwrap();
        assert!(p.find("class Dog:\n    pass").is_none());
    }

    #[test]
    fn test_for_loop_header_and_body() {
        let p    = SpanPattern::for_loop().unwrap();
        let text = "Loop:\nfor name in names:\n    print(name)\nDone.";
        let span = p.find(text).unwrap();
        assert_eq!(span.text, "for name in names:\n    print(name)");
        assert_eq!(span.start, 6);
    }

    #[test]
    fn test_patterns_are_case_sensitive() {
        let p = SpanPattern::while_loop().unwrap();
        assert!(p.find("While x:\n    y").is_none());
        assert!(p.find("while x:\n    y").is_some());
    }
}
