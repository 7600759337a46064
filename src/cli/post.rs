use crate::blog::Blog;
use crate::render::{page_title, render_post, render_post_not_found};
use crate::Result;
use anyhow::bail;
use colored::Colorize;

/// Print a single post page body, or only its markdown HTML with `fragment`
pub async fn run(blog: &Blog, slug: &str, fragment: bool, site_title: &str) -> Result<()> {
    let Some(post) = blog.load_post(slug).await else {
        if !fragment {
            println!("{}", render_post_not_found());
        }
        bail!("Post not found: {}", slug);
    };

    if fragment {
        println!("{}", post.html);
    } else {
        eprintln!("{}", page_title(&post, site_title).dimmed());
        println!("{}", render_post(&post));
    }

    Ok(())
}
