use std::path::PathBuf;

use crate::app_config::{AppConfig, Language, LineCredentials};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does not read `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let openai_api_key = require("OPENAI_API_KEY")?;
    let openai_model = or_default("OPENAI_MODEL", "gpt-4o");
    let openai_base_url = or_default("OPENAI_BASE_URL", "https://api.openai.com/v1");

    let line = LineCredentials::from_parts(
        lookup("LINE_CHANNEL_ACCESS_TOKEN").ok(),
        lookup("LINE_USER_ID").ok(),
    );

    let language = Language::from_code(&or_default("LANGUAGE", "en"));
    let config_path = PathBuf::from(or_default("SENTINEL_CONFIG_PATH", "./config.yaml"));
    let log_level = or_default("SENTINEL_LOG_LEVEL", "info");
    let log_file = Some(or_default("SENTINEL_LOG_FILE", "sentinel.log"))
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    let request_timeout_secs = parse_u64("SENTINEL_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SENTINEL_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        openai_api_key,
        openai_model,
        openai_base_url,
        line,
        language,
        config_path,
        log_level,
        log_file,
        request_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
