//! Post date handling

use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;

use crate::models::PostSummary;

/// Parse an index or frontmatter date: `YYYY-MM-DD` or RFC 3339
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
}

/// Long US form, e.g. `January 1, 2024`; `Invalid Date` when unparseable
pub fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Sort newest first; undated posts go last and ties keep index order
pub fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
