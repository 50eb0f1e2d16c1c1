use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("OPENAI_API_KEY", "sk-test");
    m
}

#[test]
fn build_app_config_fails_without_openai_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OPENAI_API_KEY"),
        "expected MissingEnvVar(OPENAI_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_openai_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.openai_api_key, "sk-test");
    assert_eq!(cfg.openai_model, "gpt-4o");
    assert_eq!(cfg.openai_base_url, "https://api.openai.com/v1");
    assert!(cfg.line.is_none());
    assert_eq!(cfg.language, Language::English);
    assert_eq!(cfg.config_path, PathBuf::from("./config.yaml"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn line_credentials_are_loaded_when_both_present() {
    let mut map = full_env();
    map.insert("LINE_CHANNEL_ACCESS_TOKEN", "token-abc");
    map.insert("LINE_USER_ID", "U123");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let line = cfg.line.expect("credentials should be present");
    assert_eq!(line.channel_access_token, "token-abc");
    assert_eq!(line.user_id, "U123");
}

#[test]
fn line_credentials_placeholder_is_ignored() {
    let mut map = full_env();
    map.insert("LINE_CHANNEL_ACCESS_TOKEN", "your_channel_access_token");
    map.insert("LINE_USER_ID", "U123");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.line.is_none());
}

#[test]
fn line_credentials_without_user_id_are_ignored() {
    let mut map = full_env();
    map.insert("LINE_CHANNEL_ACCESS_TOKEN", "token-abc");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.line.is_none());
}

#[test]
fn language_zh_tw_is_recognized() {
    let mut map = full_env();
    map.insert("LANGUAGE", "zh-TW");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.language, Language::TraditionalChinese);
}

#[test]
fn unknown_language_falls_back_to_english() {
    let mut map = full_env();
    map.insert("LANGUAGE", "fr");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.language, Language::English);
}

#[test]
fn log_file_defaults_to_sentinel_log() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_file, Some(PathBuf::from("sentinel.log")));
}

#[test]
fn log_file_override_and_blank_disables() {
    let mut map = full_env();
    map.insert("SENTINEL_LOG_FILE", "/var/log/sentinel/run.log");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/sentinel/run.log")));

    map.insert("SENTINEL_LOG_FILE", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.log_file.is_none());
}

#[test]
fn request_timeout_override() {
    let mut map = full_env();
    map.insert("SENTINEL_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn request_timeout_invalid() {
    let mut map = full_env();
    map.insert("SENTINEL_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTINEL_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SENTINEL_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = full_env();
    map.insert("SENTINEL_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = full_env();
    map.insert("LINE_CHANNEL_ACCESS_TOKEN", "token-abc");
    map.insert("LINE_USER_ID", "U123");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-test"), "api key leaked: {rendered}");
    assert!(!rendered.contains("token-abc"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
