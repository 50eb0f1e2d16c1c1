//! News collection for the sentinel: Google News RSS fetching, near-duplicate
//! headline collapsing, and re-linking model-echoed titles to their sources.

pub mod dedup;
pub mod error;
pub mod feed;
pub mod linker;

mod client;

pub use client::NewsClient;
pub use dedup::{deduplicate, DUPLICATE_THRESHOLD, MAX_RAW_ITEMS, MAX_UNIQUE_ITEMS};
pub use error::NewsError;
pub use feed::parse_feed;
pub use linker::{best_match, resolve_link, FALLBACK_LINK, MATCH_THRESHOLD};
