//! Near-duplicate headline collapsing.
//!
//! The feed is assumed to be relevance-ranked, so the first headline of a
//! cluster is the one kept and a rejection is never revisited.

use sentinel_core::{similarity, NewsItem};

/// Titles scoring above this against an accepted title are duplicates.
pub const DUPLICATE_THRESHOLD: f64 = 0.6;

/// Maximum number of unique items handed to the analyst.
pub const MAX_UNIQUE_ITEMS: usize = 8;

/// Raw feed items considered before de-duplication.
pub const MAX_RAW_ITEMS: usize = 15;

/// Drop near-duplicate headlines, keeping first occurrences in order, and
/// return at most `max_output` items.
///
/// Titles are compared lower-cased. A blank title never matches another
/// blank title, so such items are kept rather than silently collapsed.
#[must_use]
pub fn deduplicate(items: Vec<NewsItem>, max_output: usize) -> Vec<NewsItem> {
    let mut accepted: Vec<NewsItem> = Vec::new();
    let mut accepted_keys: Vec<String> = Vec::new();

    for item in items {
        let key = item.title.to_lowercase();
        let duplicate_of = accepted_keys
            .iter()
            .position(|existing| is_duplicate(&key, existing));

        if let Some(idx) = duplicate_of {
            tracing::debug!(
                title = %item.title,
                kept = %accepted[idx].title,
                "dropping near-duplicate headline"
            );
            continue;
        }

        accepted_keys.push(key);
        accepted.push(item);
    }

    accepted.truncate(max_output);
    accepted
}

fn is_duplicate(candidate: &str, existing: &str) -> bool {
    if candidate.trim().is_empty() || existing.trim().is_empty() {
        return false;
    }
    similarity(candidate, existing) > DUPLICATE_THRESHOLD
}
