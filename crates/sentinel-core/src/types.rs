use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Source name used when a feed item does not carry one.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A single headline fetched for an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    /// Publisher name, `"Unknown"` when the feed omits it.
    pub source: String,
    /// Provider-formatted timestamp. May be empty.
    pub published_at: String,
    /// Plain-text summary. Empty when the feed has none.
    #[serde(default)]
    pub summary: String,
    pub link: String,
}

impl NewsItem {
    /// Build an item with only a title and link; other fields take their defaults.
    #[must_use]
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: UNKNOWN_SOURCE.to_string(),
            published_at: String::new(),
            summary: String::new(),
            link: link.into(),
        }
    }
}

/// Latest price and percentage moves for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub symbol: String,
    pub current_price: Decimal,
    /// Percent change against the previous close.
    pub change_1d: Decimal,
    /// Percent change against the close three sessions back.
    pub change_3d: Decimal,
}

impl PriceSnapshot {
    /// Build a snapshot, rounding every value to two decimal places.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        current_price: Decimal,
        change_1d: Decimal,
        change_3d: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            current_price: round2(current_price),
            change_1d: round2(change_1d),
            change_3d: round2(change_3d),
        }
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Severity of a drawdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    #[serde(rename = "none")]
    None,
    L1,
    L2,
}

impl AlertLevel {
    /// `true` for `L1` and `L2`.
    #[must_use]
    pub fn is_triggered(self) -> bool {
        !matches!(self, AlertLevel::None)
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::None => write!(f, "none"),
            AlertLevel::L1 => write!(f, "L1"),
            AlertLevel::L2 => write!(f, "L2"),
        }
    }
}
