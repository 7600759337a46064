use crate::blog::Blog;
use crate::render::render_recent_posts;
use crate::Result;

/// Print the home page recent posts fragment
pub async fn run(blog: &Blog, limit: usize) -> Result<()> {
    let posts = blog.recent_posts(limit).await;
    println!("{}", render_recent_posts(&posts, limit));
    Ok(())
}
