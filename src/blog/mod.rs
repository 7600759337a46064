//! Blog loading
//!
//! Reads the post index and individual posts from the posts directory. Load
//! failures never reach the caller: they are logged and turned into an empty
//! index or a missing post.

pub mod date;

pub use date::{format_date, parse_date, sort_newest_first};

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::models::{FolioConfig, ParsedPost, PostSummary};
use crate::parser;

pub const INDEX_FILE: &str = "index.json";

/// Errors that can occur while loading posts
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse post index '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid post slug: {0:?}")]
    InvalidSlug(String),
}

pub type BlogResult<T> = Result<T, BlogError>;

/// Posts directory reader
#[derive(Debug, Clone)]
pub struct Blog {
    posts_dir: PathBuf,
}

impl Blog {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    pub fn from_config(config: &FolioConfig, project_root: &Path) -> Self {
        Self::new(config.posts_path(project_root))
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Load `index.json`, propagating the failure
    pub async fn try_load_index(&self) -> BlogResult<Vec<PostSummary>> {
        let path = self.posts_dir.join(INDEX_FILE);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| BlogError::Io {
                path: path.clone(),
                source,
            })?;
        let posts: Vec<PostSummary> =
            serde_json::from_str(&content).map_err(|source| BlogError::Json {
                path: path.clone(),
                source,
            })?;
        debug!(count = posts.len(), path = %path.display(), "loaded post index");
        Ok(posts)
    }

    /// Load `index.json`; an empty list when it is missing or malformed
    pub async fn load_index(&self) -> Vec<PostSummary> {
        match self.try_load_index().await {
            Ok(posts) => posts,
            Err(e) => {
                error!("Error loading posts: {}", e);
                Vec::new()
            }
        }
    }

    /// Load and parse `<slug>.md`, propagating the failure
    pub async fn try_load_post(&self, slug: &str) -> BlogResult<ParsedPost> {
        validate_slug(slug)?;
        let path = self.posts_dir.join(format!("{}.md", slug));
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| BlogError::Io {
                path: path.clone(),
                source,
            })?;
        debug!(slug, path = %path.display(), "parsing post");
        Ok(parser::parse(&normalize_content(&content)))
    }

    /// Load and parse `<slug>.md`; `None` when it cannot be read
    pub async fn load_post(&self, slug: &str) -> Option<ParsedPost> {
        match self.try_load_post(slug).await {
            Ok(post) => Some(post),
            Err(e) => {
                error!("Error loading post: {}", e);
                None
            }
        }
    }

    /// Index sorted newest first
    pub async fn posts_newest_first(&self) -> Vec<PostSummary> {
        let mut posts = self.load_index().await;
        sort_newest_first(&mut posts);
        posts
    }

    /// The `limit` newest posts
    pub async fn recent_posts(&self, limit: usize) -> Vec<PostSummary> {
        let mut posts = self.posts_newest_first().await;
        posts.truncate(limit);
        posts
    }
}

/// Slugs are bare file stems: no separators, no parent references
pub fn validate_slug(slug: &str) -> BlogResult<()> {
    if slug.is_empty() || slug.contains('/') || slug.contains('\\') || slug.contains("..") {
        warn!(slug, "rejecting post slug");
        return Err(BlogError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

/// Strip a UTF-8 BOM and normalize CRLF / CR line endings to LF
pub fn normalize_content(content: &str) -> String {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("hello-world").is_ok());
        assert!(validate_slug("2024_notes").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("../secret").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("a\\b").is_err());
    }

    #[test]
    fn test_normalize_bom() {
        let normalized = normalize_content("\u{FEFF}---\ntitle: x\n---\n");
        assert!(normalized.starts_with("---"));
    }

    #[test]
    fn test_normalize_crlf() {
        let normalized = normalize_content("---\r\ntitle: x\r\n---\r\nBody\rMore");
        assert!(!normalized.contains('\r'));
        assert_eq!(normalized, "---\ntitle: x\n---\nBody\nMore");
    }

    #[test]
    fn test_invalid_slug_error_message() {
        let err = validate_slug("../x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid post slug: \"../x\"");
    }
}
