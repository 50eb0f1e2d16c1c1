//! HTTP client for the Yahoo Finance chart endpoint.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use sentinel_core::PriceSnapshot;

use crate::error::MarketError;
use crate::snapshot::snapshot_from_closes;
use crate::wire::ChartEnvelope;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// The chart endpoint rejects obvious bot user agents.
const BROWSER_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Client for daily price history.
///
/// Use [`MarketClient::new`] for production or [`MarketClient::with_base_url`]
/// to point at a mock server in tests.
pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    /// Creates a client pointed at Yahoo Finance.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, MarketError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, MarketError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_UA)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, symbol: &str) -> String {
        let encoded = utf8_percent_encode(symbol, NON_ALPHANUMERIC);
        format!(
            "{}/v8/finance/chart/{encoded}?range=1mo&interval=1d",
            self.base_url
        )
    }

    /// Fetches one month of daily closes for `symbol`.
    ///
    /// Null closes (halted sessions) are dropped, so the result holds only
    /// real prices, oldest first.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the endpoint returns an error object.
    /// - [`MarketError::UnexpectedStatus`] on a non-2xx status without one.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the body is not the expected JSON.
    pub async fn daily_closes(&self, symbol: &str) -> Result<Vec<f64>, MarketError> {
        let response = self.client.get(self.chart_url(symbol)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ChartEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(MarketError::UnexpectedStatus {
                    status: status.as_u16(),
                    symbol: symbol.to_string(),
                });
            }
            Err(e) => {
                return Err(MarketError::Deserialize {
                    context: format!("chart({symbol})"),
                    source: e,
                });
            }
        };

        let chart = envelope.chart.ok_or_else(|| MarketError::Api {
            symbol: symbol.to_string(),
            code: "Empty".to_string(),
            description: "response has no chart node".to_string(),
        })?;

        if let Some(err) = chart.error {
            return Err(MarketError::Api {
                symbol: symbol.to_string(),
                code: err.code,
                description: err.description,
            });
        }
        if !status.is_success() {
            return Err(MarketError::UnexpectedStatus {
                status: status.as_u16(),
                symbol: symbol.to_string(),
            });
        }

        let closes = chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|r| r.indicators.quote.into_iter().next())
            .map(|q| q.close.into_iter().flatten().collect())
            .unwrap_or_default();

        Ok(closes)
    }

    /// Fetches the latest [`PriceSnapshot`] for `symbol`.
    ///
    /// Returns `Ok(None)` when the history is too short to compute a 3-day
    /// move.
    ///
    /// # Errors
    ///
    /// Same as [`MarketClient::daily_closes`].
    pub async fn fetch_snapshot(&self, symbol: &str) -> Result<Option<PriceSnapshot>, MarketError> {
        tracing::info!(symbol, "fetching price data");
        let closes = self.daily_closes(symbol).await?;
        let snapshot = snapshot_from_closes(symbol, &closes);
        if snapshot.is_none() {
            tracing::warn!(
                symbol,
                closes = closes.len(),
                "not enough price history for a snapshot"
            );
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_encodes_symbol() {
        let client = MarketClient::with_base_url(5, "https://query1.finance.yahoo.com/").unwrap();
        assert_eq!(
            client.chart_url("GC=F"),
            "https://query1.finance.yahoo.com/v8/finance/chart/GC%3DF?range=1mo&interval=1d"
        );
    }
}
