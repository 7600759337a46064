//! Frontmatter Extractor
//!
//! Splits a leading `---` delimited block of flat `key: value` lines off a post:
//! - The block must open on the very first line with exactly `---`
//! - The block closes at the first line that is exactly `---`
//! - Anything that does not fit this shape leaves the whole input as the body

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Frontmatter;

/// Whole-document shape: opening delimiter, optional content lines, closing delimiter, body.
static DOCUMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(?:(.*?)\n)?---\n(.*)\z").expect("frontmatter pattern is valid")
});

/// One metadata line: `key: value` with an ASCII word key and at least one space after the colon.
static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+):\s+(.+)$").expect("frontmatter field pattern is valid")
});

/// Extract frontmatter from a raw post
///
/// # Returns
/// * `(frontmatter, body)` - an empty mapping and the untouched input when no block is present
///
/// # Example
/// ```
/// use folio::parser::extract_frontmatter;
/// let (fm, body) = extract_frontmatter("---\ntitle: Hello\n---\nBody text");
/// assert_eq!(fm.get("title").map(String::as_str), Some("Hello"));
/// assert_eq!(body, "Body text");
/// ```
pub fn extract_frontmatter(raw: &str) -> (Frontmatter, &str) {
    let Some(caps) = DOCUMENT_RE.captures(raw) else {
        return (Frontmatter::new(), raw);
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    (parse_fields(block), body)
}

/// Parse the lines between the delimiters; lines that are not `key: value` are skipped
pub fn parse_fields(block: &str) -> Frontmatter {
    let mut fields = Frontmatter::new();

    for line in block.split('\n') {
        if let Some(caps) = FIELD_RE.captures(line) {
            // Later duplicates overwrite earlier ones
            fields.insert(caps[1].to_string(), unquote(&caps[2]).to_string());
        }
    }

    fields
}

/// Remove one layer of matching `"` or `'` quotes
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_frontmatter() {
        let (fm, body) = extract_frontmatter("---\ntitle: Hello\ndate: 2024-01-01\n---\nBody text");
        assert_eq!(fm.len(), 2);
        assert_eq!(fm["title"], "Hello");
        assert_eq!(fm["date"], "2024-01-01");
        assert_eq!(body, "Body text");
    }

    #[test]
    fn test_no_frontmatter_returns_input() {
        let inputs = [
            "",
            "# Just a heading",
            "title: Hello\n---\nBody",
            " ---\ntitle: Hello\n---\nBody",
            "----\ntitle: Hello\n---\nBody",
        ];
        for input in inputs {
            let (fm, body) = extract_frontmatter(input);
            assert!(fm.is_empty(), "unexpected frontmatter for {:?}", input);
            assert_eq!(body, input);
        }
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let input = "---\ntitle: Hello\nBody";
        let (fm, body) = extract_frontmatter(input);
        assert!(fm.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn test_closing_delimiter_needs_newline() {
        let input = "---\ntitle: Hello\n---";
        let (fm, body) = extract_frontmatter(input);
        assert!(fm.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn test_empty_body() {
        let (fm, body) = extract_frontmatter("---\ntitle: Hello\n---\n");
        assert_eq!(fm["title"], "Hello");
        assert_eq!(body, "");
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = extract_frontmatter("---\n---\nBody");
        assert!(fm.is_empty());
        assert_eq!(body, "Body");

        let (fm, body) = extract_frontmatter("---\n\n---\nBody");
        assert!(fm.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_body_keeps_later_delimiters() {
        let (fm, body) = extract_frontmatter("---\ntitle: A\n---\nIntro\n---\nMore");
        assert_eq!(fm["title"], "A");
        assert_eq!(body, "Intro\n---\nMore");
    }

    #[test]
    fn test_quote_stripping() {
        let (fm, _) = extract_frontmatter(
            "---\nsingle: 'Hello'\ndouble: \"Hello\"\nplain: Hello\nmixed: 'Hello\"\n---\n",
        );
        assert_eq!(fm["single"], "Hello");
        assert_eq!(fm["double"], "Hello");
        assert_eq!(fm["plain"], "Hello");
        assert_eq!(fm["mixed"], "'Hello\"");
    }

    #[test]
    fn test_unquote_single_layer_only() {
        assert_eq!(unquote("\"'x'\""), "'x'");
        assert_eq!(unquote("'"), "'");
        assert_eq!(unquote("''"), "");
    }

    #[test]
    fn test_malformed_lines_ignored() {
        let (fm, _) = extract_frontmatter(
            "---\ntitle: Kept\nno colon here\nspaced key: nope\ntight:nope\n- item\n---\nBody",
        );
        assert_eq!(fm.len(), 1);
        assert_eq!(fm["title"], "Kept");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let (fm, _) = extract_frontmatter("---\ntitle: First\ntitle: Second\n---\n");
        assert_eq!(fm["title"], "Second");
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let (fm, _) = extract_frontmatter("---\nlink: https://example.com/a\n---\n");
        assert_eq!(fm["link"], "https://example.com/a");
    }
}
