//! Post parser
//!
//! Normalizes raw generator output into post options: one option per
//! non-empty line, padded with empty strings up to three entries. Longer
//! output is kept whole: the parser pads but never truncates.

use promo_core::POST_COUNT;

/// Parse raw generator output into post options.
///
/// Pure and total: malformed input degrades to padded placeholders, never
/// an error.
pub fn parse_posts(raw: &str) -> Vec<String> {
    let mut posts: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    while posts.len() < POST_COUNT {
        posts.push(String::new());
    }

    posts
}
