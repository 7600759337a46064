// Folio - portfolio blog toolkit
// Parses posts written in a small markdown dialect and renders the blog's HTML fragments

pub mod blog;
pub mod cli;
pub mod github;
pub mod models;
pub mod parser;
pub mod render;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use blog::Blog;
pub use models::{FolioConfig, Frontmatter, ParsedPost, PostSummary, Repository};
pub use parser::{extract_frontmatter, parse, to_html, MarkdownParser};
