//! HTML fragments for the blog and project pages
//!
//! Index, frontmatter and repository values are escaped here. Post bodies are
//! injected as the converter produced them.

use crate::blog::format_date;
use crate::models::{ParsedPost, PostSummary, Repository};
use crate::parser::escape_html;

fn post_card(post: &PostSummary) -> String {
    let slug = escape_html(&post.slug);
    format!(
        r#"<article class="blog-post-card">
<h3><a href="post.html?slug={slug}" style="color: inherit; text-decoration: none;">{title}</a></h3>
<div class="post-meta"><span class="pip-badge">{date}</span></div>
<p>{description}</p>
<a href="post.html?slug={slug}" class="pip-btn primary">Read More</a>
</article>
"#,
        slug = slug,
        title = escape_html(&post.title),
        date = escape_html(&format_date(&post.date)),
        description = escape_html(&post.description),
    )
}

fn post_cards<'a>(posts: impl IntoIterator<Item = &'a PostSummary>) -> String {
    let mut html = String::from("<div class=\"blog-preview\">\n");
    for post in posts {
        html.push_str(&post_card(post));
    }
    html.push_str("</div>");
    html
}

/// Every post as a card, in the order given
pub fn render_post_list(posts: &[PostSummary]) -> String {
    if posts.is_empty() {
        return r#"<p class="pip-text">No posts found.</p>"#.to_string();
    }
    post_cards(posts)
}

/// The first `limit` posts as cards plus a link to the full list
pub fn render_recent_posts(posts: &[PostSummary], limit: usize) -> String {
    if posts.is_empty() {
        return r#"<p class="pip-text">No posts yet. Check back soon!</p>"#.to_string();
    }
    let mut html = post_cards(posts.iter().take(limit));
    html.push_str(
        "\n<div style=\"text-align: center; margin-top: 30px;\"><a href=\"blog.html\" class=\"pip-btn\">View All Posts</a></div>",
    );
    html
}

/// A single post page body
pub fn render_post(post: &ParsedPost) -> String {
    let mut html = String::from("<article class=\"pip-panel\">\n");
    html.push_str(&format!(
        "<div class=\"pip-panel-header\">{}</div>\n",
        escape_html(post.title().unwrap_or("Untitled"))
    ));

    if let Some(date) = post.date() {
        html.push_str(&format!(
            "<div class=\"post-meta pip-text subtle\" style=\"margin-bottom: 20px;\"><span class=\"pip-badge\">{}</span></div>\n",
            escape_html(&format_date(date))
        ));
    }

    html.push_str(&format!(
        "<div class=\"markdown-content\">{}</div>\n",
        post.html
    ));
    html.push_str("</article>\n");
    html.push_str(
        "<div style=\"margin-top: 30px; text-align: center;\"><a href=\"blog.html\" class=\"pip-btn\">← Back to Blog</a></div>",
    );
    html
}

/// Rendered when a post cannot be loaded
pub fn render_post_not_found() -> String {
    r#"<p class="pip-text error">Post not found.</p>"#.to_string()
}

/// Document title for a post page
pub fn page_title(post: &ParsedPost, site_title: &str) -> String {
    match post.title() {
        Some(title) => format!("{} - {}", title, site_title),
        None => site_title.to_string(),
    }
}

/// Repository showcase grid
pub fn render_projects(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return r#"<p class="pip-text">No projects found.</p>"#.to_string();
    }

    let mut html = String::from("<div class=\"project-grid\">\n");
    for repo in repos {
        let language = repo
            .language
            .as_deref()
            .map(|lang| format!("<span class=\"pip-badge\">{}</span>", escape_html(lang)))
            .unwrap_or_default();
        html.push_str(&format!(
            r#"<div class="project-card">
<h3><a href="{url}" target="_blank">{name}</a></h3>
<p>{description}</p>
<div class="project-meta">{language}<span class="pip-badge info">★ {stars}</span><span class="pip-badge">Forks: {forks}</span></div>
</div>
"#,
            url = escape_html(&repo.html_url),
            name = escape_html(&repo.name),
            description = escape_html(
                repo.description
                    .as_deref()
                    .unwrap_or("No description available")
            ),
            language = language,
            stars = repo.stargazers_count,
            forks = repo.forks_count,
        ));
    }
    html.push_str("</div>");
    html
}
