use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read watchlist file {path}: {source}")]
    WatchlistIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watchlist YAML: {0}")]
    WatchlistParse(#[source] serde_yaml::Error),

    #[error("watchlist validation error: {0}")]
    Validation(String),
}
