use sentinel_analyst::AnalysisResult;
use sentinel_core::PriceSnapshot;
use serde::{Deserialize, Serialize};

/// Everything a notification shows: the classification plus the prices
/// that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub price_data: PriceSnapshot,
}

impl AlertReport {
    #[must_use]
    pub fn new(analysis: AnalysisResult, price_data: PriceSnapshot) -> Self {
        Self {
            analysis,
            price_data,
        }
    }
}
