pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{extract_frontmatter, parse_fields, unquote};
pub use markdown::{escape_html, split_code_blocks, to_html, wrap_paragraphs, Segment};

use crate::models::ParsedPost;

/// Parse a raw post into its frontmatter and rendered HTML body
///
/// # Example
/// ```
/// let post = folio::parser::parse("---\ntitle: Hello\n---\n# Hi");
/// assert_eq!(post.title(), Some("Hello"));
/// assert_eq!(post.html, "<h1>Hi</h1>");
/// ```
pub fn parse(raw: &str) -> ParsedPost {
    let (frontmatter, body) = extract_frontmatter(raw);
    ParsedPost {
        frontmatter,
        html: to_html(body),
    }
}

/// Stateless handle over [`parse`] for callers that keep a parser around
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownParser;

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> ParsedPost {
        parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_frontmatter() {
        let post = parse("---\ntitle: 'Hello'\ndate: 2024-01-01\n---\nBody text");
        assert_eq!(post.title(), Some("Hello"));
        assert_eq!(post.date(), Some("2024-01-01"));
        assert_eq!(post.html, "<p>Body text</p>");
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let post = parse("## Only body");
        assert!(post.frontmatter.is_empty());
        assert_eq!(post.html, "<h2>Only body</h2>");
    }

    #[test]
    fn test_frontmatter_delimiters_not_rendered_as_rules() {
        let post = parse("---\ntitle: A\n---\n---\n");
        assert_eq!(post.title(), Some("A"));
        assert_eq!(post.html, "<hr>\n");
    }

    #[test]
    fn test_parser_calls_do_not_share_state() {
        let parser = MarkdownParser::new();
        let first = parser.parse("---\ntitle: First\nextra: yes\n---\nOne");
        let second = parser.parse("Two");
        assert_eq!(first.frontmatter.len(), 2);
        assert!(second.frontmatter.is_empty());
        assert_eq!(second.html, "<p>Two</p>");
    }
}
