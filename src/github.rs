//! Public repository showcase
//!
//! Selection is pure; fetching from the GitHub API needs the `github` feature.

use crate::models::Repository;

pub const DEFAULT_PROJECT_LIMIT: usize = 6;

/// Drop forks, order by stars (most first), keep `limit`
pub fn select_showcase(mut repos: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repos.retain(|repo| !repo.fork);
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(limit);
    repos
}

/// Repositories endpoint for `user`, most recently updated first
pub fn repos_url(user: &str, limit: usize) -> String {
    format!(
        "https://api.github.com/users/{}/repos?sort=updated&per_page={}",
        user, limit
    )
}

#[cfg(feature = "github")]
pub use fetch::{fetch_repos, try_fetch_repos};

#[cfg(feature = "github")]
mod fetch {
    use super::{repos_url, select_showcase};
    use crate::models::Repository;
    use anyhow::{bail, Context, Result};
    use tracing::{debug, error};

    const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

    pub async fn try_fetch_repos(user: &str, limit: usize) -> Result<Vec<Repository>> {
        let url = repos_url(user, limit);
        debug!(%url, "fetching repositories");

        let response = reqwest::Client::new()
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .context("Failed to fetch repositories")?;

        if !response.status().is_success() {
            bail!("Failed to fetch repositories: HTTP {}", response.status());
        }

        let repos: Vec<Repository> = response
            .json()
            .await
            .context("Failed to decode repositories")?;
        Ok(select_showcase(repos, limit))
    }

    /// Fetch the showcase; an empty list on any failure
    pub async fn fetch_repos(user: &str, limit: usize) -> Vec<Repository> {
        match try_fetch_repos(user, limit).await {
            Ok(repos) => repos,
            Err(e) => {
                error!("Error fetching GitHub repos: {:#}", e);
                Vec::new()
            }
        }
    }
}
