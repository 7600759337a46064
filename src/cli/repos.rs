use crate::github::fetch_repos;
use crate::render::render_projects;
use crate::Result;
use anyhow::bail;

/// Print the projects grid for a GitHub user
pub async fn run(user: Option<&str>, limit: usize) -> Result<()> {
    let Some(user) = user else {
        bail!("No GitHub user given; pass --user or set github_user in folio.toml");
    };

    let repos = fetch_repos(user, limit).await;
    println!("{}", render_projects(&repos));
    Ok(())
}
