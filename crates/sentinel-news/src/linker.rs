//! Maps a model-echoed headline back to the article it came from.

use sentinel_core::{similarity, NewsItem};

/// Returned when no original headline is close enough.
pub const FALLBACK_LINK: &str = "https://news.google.com";

/// A candidate must score above this to take an item's link.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Best-matching original item for `candidate_title`, with its ratio.
///
/// Ties keep the earlier item. Blank titles on either side never match.
#[must_use]
pub fn best_match<'a>(candidate_title: &str, items: &'a [NewsItem]) -> Option<(&'a NewsItem, f64)> {
    let candidate = candidate_title.to_lowercase();
    if candidate.trim().is_empty() {
        return None;
    }

    let mut best: Option<(&NewsItem, f64)> = None;
    for item in items {
        if item.title.trim().is_empty() {
            continue;
        }
        let ratio = similarity(&candidate, &item.title.to_lowercase());
        if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((item, ratio));
        }
    }
    best
}

/// Link of the closest original item, or [`FALLBACK_LINK`] when nothing
/// scores above [`MATCH_THRESHOLD`].
#[must_use]
pub fn resolve_link(candidate_title: &str, items: &[NewsItem]) -> String {
    match best_match(candidate_title, items) {
        Some((item, ratio)) if ratio > MATCH_THRESHOLD => item.link.clone(),
        _ => FALLBACK_LINK.to_string(),
    }
}
