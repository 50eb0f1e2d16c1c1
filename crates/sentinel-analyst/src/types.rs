use sentinel_core::AlertLevel;
use serde::{Deserialize, Deserializer, Serialize};

/// Whether a move looks like panic or a change in fundamentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsType {
    Emotional,
    Structural,
    Unclear,
}

impl<'de> Deserialize<'de> for NewsType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.map_or(NewsType::Unclear, Self::from))
    }
}

impl From<String> for NewsType {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "emotional" => NewsType::Emotional,
            "structural" => NewsType::Structural,
            _ => NewsType::Unclear,
        }
    }
}

impl NewsType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NewsType::Emotional => "emotional",
            NewsType::Structural => "structural",
            NewsType::Unclear => "unclear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.map_or(Direction::Neutral, Self::from))
    }
}

impl From<String> for Direction {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "bullish" => Direction::Bullish,
            "bearish" => Direction::Bearish,
            _ => Direction::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.map_or(Confidence::Low, Self::from))
    }
}

impl From<String> for Confidence {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

/// A headline the model says it relied on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsUsed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    /// Source article, filled in after the call from the fetched items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Structured classification of a triggered move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset: String,
    #[serde(default = "untriggered", deserialize_with = "lenient_level")]
    pub trigger_level: AlertLevel,
    #[serde(default = "unclear")]
    pub news_type: NewsType,
    #[serde(default = "neutral")]
    pub direction: Direction,
    #[serde(default = "low")]
    pub confidence: Confidence,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_driver: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supporting_points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub news_used: Vec<NewsUsed>,
}

fn untriggered() -> AlertLevel {
    AlertLevel::None
}

fn unclear() -> NewsType {
    NewsType::Unclear
}

fn neutral() -> Direction {
    Direction::Neutral
}

fn low() -> Confidence {
    Confidence::Low
}

/// `null` is treated like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_level<'de, D>(deserializer: D) -> Result<AlertLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        Some(l) if l.eq_ignore_ascii_case("L2") => AlertLevel::L2,
        Some(l) if l.eq_ignore_ascii_case("L1") => AlertLevel::L1,
        _ => AlertLevel::None,
    })
}
