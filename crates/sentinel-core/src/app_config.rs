use std::path::PathBuf;

/// Output language for model text and alert labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

impl Language {
    /// Parse a `LANGUAGE` value. Anything other than `zh-TW` is English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("zh-tw") {
            Language::TraditionalChinese
        } else {
            Language::English
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::TraditionalChinese => "zh-TW",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Messaging API credentials for push delivery.
#[derive(Clone, PartialEq, Eq)]
pub struct LineCredentials {
    pub channel_access_token: String,
    pub user_id: String,
}

impl LineCredentials {
    /// Returns `None` when either value is missing, blank, or still a
    /// `your_...` placeholder copied from the sample env file.
    #[must_use]
    pub fn from_parts(token: Option<String>, user_id: Option<String>) -> Option<Self> {
        let usable = |v: &Option<String>| {
            v.as_deref()
                .is_some_and(|s| !s.trim().is_empty() && !s.starts_with("your_"))
        };
        if !usable(&token) || !usable(&user_id) {
            return None;
        }
        Some(Self {
            channel_access_token: token?,
            user_id: user_id?,
        })
    }
}

impl std::fmt::Debug for LineCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineCredentials")
            .field("channel_access_token", &"[redacted]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub line: Option<LineCredentials>,
    pub language: Language,
    pub config_path: PathBuf,
    pub log_level: String,
    /// Log file written alongside stderr. `None` disables it.
    pub log_file: Option<PathBuf>,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"[redacted]")
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("line", &self.line)
            .field("language", &self.language)
            .field("config_path", &self.config_path)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
