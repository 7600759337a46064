use crate::blog::normalize_content;
use crate::parser;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Render a markdown file to stdout as an HTML fragment or as JSON
pub fn run(file: &Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let post = parser::parse(&normalize_content(&content));

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{}", post.html);
    }

    Ok(())
}
