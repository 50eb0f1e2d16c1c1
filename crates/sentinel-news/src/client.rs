//! Google News RSS search client.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use sentinel_core::NewsItem;

use crate::dedup::{deduplicate, MAX_RAW_ITEMS, MAX_UNIQUE_ITEMS};
use crate::error::NewsError;
use crate::feed::parse_feed;

const DEFAULT_BASE_URL: &str = "https://news.google.com";

/// Fetches recent headlines for a search query.
///
/// Use [`NewsClient::new`] for production or [`NewsClient::with_base_url`]
/// to point at a mock server in tests.
pub struct NewsClient {
    client: Client,
    base_url: String,
}

impl NewsClient {
    /// Creates a client pointed at Google News.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, NewsError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsError::InvalidBaseUrl`] if `base_url`
    /// is not an http(s) URL.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, NewsError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(NewsError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sentinel/0.1 (commodity-risk)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search URL for `query`, English/US edition.
    fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        format!(
            "{}/rss/search?q={encoded}&hl=en-US&gl=US&ceid=US:en",
            self.base_url
        )
    }

    /// Fetches the first [`MAX_RAW_ITEMS`] feed items for `query`, without
    /// de-duplication.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] on network failure,
    /// [`NewsError::UnexpectedStatus`] on a non-2xx response, or
    /// [`NewsError::Xml`] on malformed RSS.
    pub async fn fetch_raw(&self, query: &str) -> Result<Vec<NewsItem>, NewsError> {
        let url = self.search_url(query);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_feed(&body, MAX_RAW_ITEMS)
    }

    /// Fetches headlines for `query` and collapses near-duplicates, returning
    /// at most [`MAX_UNIQUE_ITEMS`] items in feed order.
    ///
    /// # Errors
    ///
    /// Same as [`NewsClient::fetch_raw`].
    pub async fn recent_news(&self, query: &str) -> Result<Vec<NewsItem>, NewsError> {
        tracing::info!(query, "fetching news");
        let raw = self.fetch_raw(query).await?;
        let raw_count = raw.len();
        let unique = deduplicate(raw, MAX_UNIQUE_ITEMS);
        tracing::debug!(
            query,
            raw = raw_count,
            unique = unique.len(),
            "de-duplicated headlines"
        );
        Ok(unique)
    }
}
