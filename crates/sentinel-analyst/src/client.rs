//! HTTP client for an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use reqwest::Client;
use sentinel_core::{AlertLevel, Language, NewsItem, PriceSnapshot};
use serde::{Deserialize, Serialize};

use crate::error::AnalystError;
use crate::links::attach_links;
use crate::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::recommendation::override_recommendation;
use crate::types::AnalysisResult;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const TEMPERATURE: f64 = 0.3;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Classifies triggered moves with a chat model.
pub struct AnalystClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnalystClient {
    /// Creates a client for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`AnalystError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, AnalystError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("sentinel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify a triggered move for `asset_name` from its price snapshot
    /// and recent headlines.
    ///
    /// The returned result carries `trigger` as its level, links resolved
    /// against `news`, and the policy wording for `recommended_action`
    /// wherever a rule applies.
    ///
    /// # Errors
    ///
    /// - [`AnalystError::Http`] on network failure.
    /// - [`AnalystError::UnexpectedStatus`] on a non-2xx response.
    /// - [`AnalystError::EmptyResponse`] when no choice carries content.
    /// - [`AnalystError::Deserialize`] when the response or the model's
    ///   JSON does not parse.
    pub async fn analyze(
        &self,
        asset_name: &str,
        trigger: AlertLevel,
        snapshot: &PriceSnapshot,
        news: &[NewsItem],
        language: Language,
    ) -> Result<AnalysisResult, AnalystError> {
        let user = user_prompt(asset_name, trigger, snapshot, news, language);
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: TEMPERATURE,
        };

        tracing::info!(
            asset = asset_name,
            %trigger,
            model = %self.model,
            headlines = news.len(),
            "sending analysis request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalystError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(|e| AnalystError::Deserialize {
                context: "chat completion response".to_string(),
                source: e,
            })?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(AnalystError::EmptyResponse)?;

        let mut result = parse_analysis(&content)?;
        result.trigger_level = trigger;
        if result.asset.trim().is_empty() {
            result.asset = asset_name.to_string();
        }
        attach_links(&mut result, news);
        let result = override_recommendation(result, trigger, language);

        tracing::info!(
            asset = asset_name,
            news_type = result.news_type.as_str(),
            "analysis complete"
        );
        Ok(result)
    }
}

/// Parse the model's message, tolerating a surrounding markdown code fence.
pub(crate) fn parse_analysis(content: &str) -> Result<AnalysisResult, AnalystError> {
    serde_json::from_str(strip_code_fence(content)).map_err(|e| AnalystError::Deserialize {
        context: "model analysis JSON".to_string(),
        source: e,
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
