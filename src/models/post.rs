//! Post data models
//!
//! A post is addressed by slug. The index (`index.json`) lists [`PostSummary`]
//! records; a single post file parses into a [`ParsedPost`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat `key: value` metadata from the head of a post
pub type Frontmatter = BTreeMap<String, String>;

/// Result of parsing one post: metadata plus the rendered HTML fragment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedPost {
    pub frontmatter: Frontmatter,
    pub html: String,
}

impl ParsedPost {
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").map(String::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.frontmatter.get("date").map(String::as_str)
    }
}

/// One entry of the post index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostSummary {
    /// File stem of the post under the posts directory
    pub slug: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// ISO date (`2024-01-31` or RFC 3339)
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_ignores_unknown_fields() {
        let json = r#"{"slug":"a","title":"A","description":"d","date":"2024-01-01","tags":["x"]}"#;
        let summary: PostSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.slug, "a");
        assert_eq!(summary.date, "2024-01-01");
    }

    #[test]
    fn test_summary_description_optional() {
        let json = r#"{"slug":"a","title":"A","date":"2024-01-01"}"#;
        let summary: PostSummary = serde_json::from_str(json).unwrap();
        assert!(summary.description.is_empty());
    }

    #[test]
    fn test_parsed_post_accessors() {
        let mut frontmatter = Frontmatter::new();
        frontmatter.insert("title".to_string(), "Hello".to_string());
        let post = ParsedPost {
            frontmatter,
            html: String::new(),
        };
        assert_eq!(post.title(), Some("Hello"));
        assert_eq!(post.date(), None);
    }

    #[test]
    fn test_parsed_post_serializes_as_pair() {
        let post = ParsedPost::default();
        let value = serde_json::to_value(&post).unwrap();
        assert!(value.get("frontmatter").is_some());
        assert_eq!(value["html"], "");
    }
}
