//! HTTP client for the LINE Messaging API push endpoint.

use std::time::Duration;

use reqwest::Client;
use sentinel_core::{Language, LineCredentials};
use serde::Serialize;
use serde_json::Value;

use crate::error::NotifyError;
use crate::flex::{alt_text, build_flex_message};
use crate::report::AlertReport;

const DEFAULT_BASE_URL: &str = "https://api.line.me";

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    to: &'a str,
    messages: [FlexMessage; 1],
}

#[derive(Debug, Serialize)]
struct FlexMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "altText")]
    alt_text: String,
    contents: Value,
}

/// Pushes alert bubbles to a single LINE user.
///
/// Use [`LineClient::new`] for production or [`LineClient::with_base_url`]
/// to point at a mock server in tests.
pub struct LineClient {
    client: Client,
    credentials: LineCredentials,
    base_url: String,
}

impl LineClient {
    /// Creates a client pointed at the LINE API.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(credentials: LineCredentials, timeout_secs: u64) -> Result<Self, NotifyError> {
        Self::with_base_url(credentials, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        credentials: LineCredentials,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("sentinel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Push `report` as a Flex message.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Http`] on network failure.
    /// - [`NotifyError::UnexpectedStatus`] on a non-2xx response.
    pub async fn push(&self, report: &AlertReport, language: Language) -> Result<(), NotifyError> {
        let request = PushRequest {
            to: &self.credentials.user_id,
            messages: [FlexMessage {
                kind: "flex",
                alt_text: alt_text(report),
                contents: build_flex_message(report, language),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v2/bot/message/push", self.base_url))
            .bearer_auth(&self.credentials.channel_access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(asset = %report.analysis.asset, "LINE notification sent");
        Ok(())
    }
}
