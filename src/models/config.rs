//! Site configuration (`folio.toml`)

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Site configuration loaded from `folio.toml` at the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FolioConfig {
    /// Appended to post titles in the page title
    pub site_title: String,

    /// Directory holding `index.json` and `<slug>.md` files, relative to the root
    pub posts_dir: PathBuf,

    /// Number of posts on the home page
    pub recent_limit: usize,

    /// GitHub account whose public repositories are showcased
    pub github_user: Option<String>,

    /// Number of repositories in the showcase
    pub project_limit: usize,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            site_title: "Portfolio".to_string(),
            posts_dir: PathBuf::from("posts"),
            recent_limit: 3,
            github_user: None,
            project_limit: crate::github::DEFAULT_PROJECT_LIMIT,
        }
    }
}

impl FolioConfig {
    /// Load config from `folio.toml`, falling back to defaults when absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// Posts directory resolved against the project root
    pub fn posts_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.posts_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.project_limit, 6);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "site_title = \"Rafael Paez\"\ngithub_user = \"rpaez\"\n",
        )
        .unwrap();

        let config = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(config.site_title, "Rafael Paez");
        assert_eq!(config.github_user.as_deref(), Some("rpaez"));
        assert_eq!(config.posts_dir, PathBuf::from("posts"));
        assert_eq!(config.posts_path(dir.path()), dir.path().join("posts"));
    }

    #[test]
    fn test_load_malformed_config_errors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "recent_limit = \"many\"").unwrap();
        let err = FolioConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
