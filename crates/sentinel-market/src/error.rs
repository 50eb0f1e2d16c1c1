use thiserror::Error;

/// Errors returned by the market-data client.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The chart endpoint answered with an error object.
    #[error("chart API error for {symbol}: {code}: {description}")]
    Api {
        symbol: String,
        code: String,
        description: String,
    },

    #[error("unexpected HTTP status {status} for {symbol}")]
    UnexpectedStatus { status: u16, symbol: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
