//! Markdown-to-HTML Converter
//!
//! Renders the blog's reduced markdown dialect into an HTML fragment. Fenced code
//! blocks are cut out first and kept as opaque segments; every later rewrite only
//! sees the text between them. Rewrites run in a fixed order:
//!
//! 1. fenced code blocks
//! 2. headers (`###` before `##` before `#`)
//! 3. emphasis (`**`/`__` strong, then `*`/`_` em)
//! 4. inline code
//! 5. links
//! 6. images
//! 7. blockquotes
//! 8. unordered list items, then the first run of them wrapped in `<ul>`
//! 9. ordered list items (never wrapped)
//! 10. horizontal rules
//! 11. paragraph wrapping
//! 12. list item cleanup

use std::sync::LazyLock;

use regex::{Captures, Regex};

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```([A-Za-z0-9_]+)?\n(.*?)```").expect("fence pattern is valid")
});
static STRONG_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("strong pattern is valid"));
static STRONG_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").expect("strong pattern is valid"));
static EM_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("em pattern is valid"));
static EM_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").expect("em pattern is valid"));
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));
// The optional `!` is captured so image syntax is left for the image pass.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
});
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image pattern is valid"));
static LIST_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</li>\s*<li>").expect("list gap pattern is valid"));

/// A piece of the document after fenced code blocks have been cut out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Rendered `<pre><code>` block; no later pass touches it
    Code(String),
    /// Markdown still to be rewritten
    Text {
        content: String,
        /// False when the text continues a line that a code block closed
        line_start: bool,
    },
}

/// Convert a markdown body to an HTML fragment. Never fails; unmatched syntax stays literal.
pub fn to_html(markdown: &str) -> String {
    let mut segments = split_code_blocks(markdown);

    for segment in &mut segments {
        if let Segment::Text {
            content,
            line_start,
        } = segment
        {
            *content = rewrite_inline_stages(content, *line_start);
        }
    }

    wrap_first_list(&mut segments);

    for segment in &mut segments {
        if let Segment::Text {
            content,
            line_start,
        } = segment
        {
            *content = rewrite_trailing_stages(content, *line_start);
        }
    }

    let wrapped = wrap_segment_paragraphs(&segments);
    LIST_GAP_RE.replace_all(&wrapped, "</li><li>").into_owned()
}

/// Escape `& < > " '` as HTML entities
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Stage 1: cut fenced code blocks out of the body and render them
pub fn split_code_blocks(markdown: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    let mut line_start = true;

    for caps in FENCE_RE.captures_iter(markdown) {
        let Some(whole) = caps.get(0) else { continue };

        if whole.start() > last {
            segments.push(Segment::Text {
                content: markdown[last..whole.start()].to_string(),
                line_start,
            });
        }

        let lang = caps.get(1).map_or("text", |m| m.as_str());
        let code = caps.get(2).map_or("", |m| m.as_str());
        segments.push(Segment::Code(format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            lang,
            escape_html(code.trim())
        )));

        last = whole.end();
        line_start = markdown[..last].ends_with('\n');
    }

    if last < markdown.len() {
        segments.push(Segment::Text {
            content: markdown[last..].to_string(),
            line_start,
        });
    }

    segments
}

/// Stages 2-7 and the item half of stage 8
fn rewrite_inline_stages(text: &str, line_start: bool) -> String {
    let text = map_lines(text, line_start, render_header);

    let text = STRONG_STAR_RE.replace_all(&text, "<strong>$1</strong>");
    let text = STRONG_UNDERSCORE_RE.replace_all(&text, "<strong>$1</strong>");
    let text = EM_STAR_RE.replace_all(&text, "<em>$1</em>");
    let text = EM_UNDERSCORE_RE.replace_all(&text, "<em>$1</em>");

    let text = INLINE_CODE_RE.replace_all(&text, "<code>$1</code>");

    let text = LINK_RE.replace_all(&text, |caps: &Captures| {
        if caps[1].is_empty() {
            format!("<a href=\"{}\" target=\"_blank\">{}</a>", &caps[3], &caps[2])
        } else {
            caps[0].to_string()
        }
    });
    let text = IMAGE_RE.replace_all(&text, "<img src=\"$2\" alt=\"$1\" />");

    let text = map_lines(&text, line_start, |line| {
        line.strip_prefix("> ")
            .map(|quote| format!("<blockquote>{}</blockquote>", quote))
    });

    map_lines(&text, line_start, |line| {
        line.strip_prefix("* ")
            .or_else(|| line.strip_prefix("- "))
            .map(|item| format!("<li>{}</li>", item))
    })
}

/// Stages 9 and 10
fn rewrite_trailing_stages(text: &str, line_start: bool) -> String {
    let text = map_lines(text, line_start, |line| {
        ordered_item(line).map(|item| format!("<li>{}</li>", item))
    });

    map_lines(&text, line_start, |line| {
        (line == "---" || line == "***").then(|| "<hr>".to_string())
    })
}

fn render_header(line: &str) -> Option<String> {
    if let Some(title) = line.strip_prefix("### ") {
        Some(format!("<h3>{}</h3>", title))
    } else if let Some(title) = line.strip_prefix("## ") {
        Some(format!("<h2>{}</h2>", title))
    } else {
        line.strip_prefix("# ").map(|title| format!("<h1>{}</h1>", title))
    }
}

/// `12. text` -> `text`
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Apply a line rewrite to every line that starts a line in the full document
fn map_lines<F>(text: &str, line_start: bool, rewrite: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 && !line_start {
                return line.to_string();
            }
            rewrite(line).unwrap_or_else(|| line.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_list_item(line: &str) -> bool {
    line.starts_with("<li>") && line.ends_with("</li>")
}

/// Second half of stage 8: wrap the first contiguous run of item lines in `<ul>`
fn wrap_first_list(segments: &mut [Segment]) {
    for segment in segments.iter_mut() {
        let Segment::Text {
            content,
            line_start,
        } = segment
        else {
            continue;
        };

        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let first_eligible = usize::from(!*line_start);

        let Some(start) = (first_eligible..lines.len()).find(|&i| is_list_item(&lines[i])) else {
            continue;
        };
        let end = (start..lines.len())
            .take_while(|&i| is_list_item(&lines[i]))
            .last()
            .unwrap_or(start);

        lines[start].insert_str(0, "<ul>");
        lines[end].push_str("</ul>");
        *content = lines.join("\n");
        return;
    }
}

/// Line state for paragraph wrapping
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BlockState {
    in_code: bool,
    in_list: bool,
}

impl BlockState {
    /// Advance on a trimmed line; code and list flags move independently
    fn advance(&mut self, line: &str) {
        if line.starts_with("<pre>") {
            self.in_code = true;
        }
        if line.ends_with("</pre>") {
            self.in_code = false;
        }
        if line.starts_with("<ul>") || line.starts_with("<ol>") {
            self.in_list = true;
        }
        if line.starts_with("</ul>") || line.starts_with("</ol>") {
            self.in_list = false;
        }
    }

    fn wraps(&self, line: &str) -> bool {
        !line.is_empty() && !line.starts_with('<') && !self.in_code && !self.in_list
    }
}

/// Stage 11: wrap bare lines in `<p>`
pub fn wrap_paragraphs(html: &str) -> String {
    wrap_lines(html.split('\n').map(|line| (line.to_string(), false)).collect())
}

/// Stage 11 over segments; lines holding any part of a code block are never wrapped
fn wrap_segment_paragraphs(segments: &[Segment]) -> String {
    let mut lines: Vec<(String, bool)> = vec![(String::new(), false)];

    for segment in segments {
        let (text, protected) = match segment {
            Segment::Code(html) => (html.as_str(), true),
            Segment::Text { content, .. } => (content.as_str(), false),
        };
        for (idx, part) in text.split('\n').enumerate() {
            if idx > 0 {
                lines.push((String::new(), false));
            }
            if let Some((line, line_protected)) = lines.last_mut() {
                line.push_str(part);
                *line_protected |= protected;
            }
        }
    }

    wrap_lines(lines)
}

fn wrap_lines(lines: Vec<(String, bool)>) -> String {
    let mut state = BlockState::default();

    lines
        .into_iter()
        .map(|(raw, protected)| {
            let line = raw.trim();
            state.advance(line);
            if !protected && state.wraps(line) {
                format!("<p>{}</p>", line)
            } else {
                raw
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
