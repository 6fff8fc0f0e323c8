//! Hashtag sets.

use std::collections::HashSet;

use crate::input::normalize_list;

/// Upper bound on the size of a generated hashtag set.
pub const MAX_HASHTAGS: usize = 24;

/// Generic marketing tags appended after the input-derived ones.
pub const BASE_HASHTAGS: [&str; 10] = [
    "business",
    "growth",
    "marketing",
    "content",
    "strategy",
    "experience",
    "learn",
    "instagram",
    "contentcreation",
    "creator",
];

/// Strip `#` and collapse each whitespace run into a single `_`.
fn tagify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars().filter(|c| *c != '#') {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Build the hashtag set for a niche, audience and brand keywords.
///
/// Input-derived tags come first (niche, then audience, then keywords),
/// followed by [`BASE_HASHTAGS`]. Every tag is lowercased, appears once, and
/// carries no `#`. At most [`MAX_HASHTAGS`] entries are returned; truncation
/// happens after deduplication.
pub fn generate_hashtags(niche: &str, audience: &str, keywords: &[String]) -> Vec<String> {
    let seed = normalize_list(&tagify(niche))
        .into_iter()
        .chain(normalize_list(&tagify(audience)))
        .chain(keywords.iter().map(|k| tagify(k)))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase());

    let mut seen = HashSet::new();
    seed.chain(BASE_HASHTAGS.iter().map(|b| b.to_lowercase()))
        .filter(|t| seen.insert(t.clone()))
        .take(MAX_HASHTAGS)
        .collect()
}
