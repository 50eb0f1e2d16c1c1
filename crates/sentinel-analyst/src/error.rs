use thiserror::Error;

/// Errors returned by the classification client.
#[derive(Debug, Error)]
pub enum AnalystError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat completion failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("model returned no message content")]
    EmptyResponse,

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
