use crate::blog::{format_date, Blog};
use crate::Result;
use colored::Colorize;

/// List indexed posts, newest first
pub async fn run(blog: &Blog, limit: Option<usize>) -> Result<()> {
    println!("{}", "📋 Listing posts...".cyan());

    let mut posts = blog.posts_newest_first().await;
    if let Some(limit) = limit {
        posts.truncate(limit);
    }

    if posts.is_empty() {
        println!(
            "{}",
            format!("No posts found in {}", blog.posts_dir().display()).yellow()
        );
        return Ok(());
    }

    println!("\n{}", "Posts:".green().bold());
    for post in &posts {
        println!(
            "   • {}  {}  {}",
            format_date(&post.date).dimmed(),
            post.slug.bold(),
            post.title
        );
    }

    Ok(())
}
