use thiserror::Error;

/// Errors returned by the push client.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("push failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
