//! Fixed recommended-action wording for the cases the alert policy pins down.
//!
//! The model is asked to follow these rules, but its output is not trusted to;
//! the override runs after every successful call.

use sentinel_core::{AlertLevel, Language};

use crate::types::{AnalysisResult, Direction, NewsType};

const CONTRARIAN_EN: &str = "Potential contrarian opportunity (consider DCA)";
const CONTRARIAN_ZH: &str = "潛在反向操作機會 (考慮分批進場)";
const NO_CATCHING_EN: &str = "Do NOT buy against trend";
const NO_CATCHING_ZH: &str = "切勿逆勢承接";
const WAIT_EN: &str = "Wait and monitor";
const WAIT_ZH: &str = "觀望為宜，持續監控";

/// Policy wording for this combination, or `None` to keep the model's text.
#[must_use]
pub fn policy_action(
    trigger: AlertLevel,
    news_type: NewsType,
    direction: Direction,
    language: Language,
) -> Option<&'static str> {
    let zh = language == Language::TraditionalChinese;
    if trigger == AlertLevel::L2 && news_type == NewsType::Emotional {
        Some(if zh { CONTRARIAN_ZH } else { CONTRARIAN_EN })
    } else if news_type == NewsType::Structural && direction == Direction::Bearish {
        Some(if zh { NO_CATCHING_ZH } else { NO_CATCHING_EN })
    } else if news_type == NewsType::Unclear {
        Some(if zh { WAIT_ZH } else { WAIT_EN })
    } else {
        None
    }
}

/// Replace `recommended_action` with the policy wording when a rule applies.
#[must_use]
pub fn override_recommendation(
    mut result: AnalysisResult,
    trigger: AlertLevel,
    language: Language,
) -> AnalysisResult {
    if let Some(action) = policy_action(trigger, result.news_type, result.direction, language) {
        if result.recommended_action != action {
            tracing::debug!(
                asset = %result.asset,
                model_action = %result.recommended_action,
                policy_action = action,
                "overriding recommended action"
            );
        }
        result.recommended_action = action.to_string();
    }
    result
}
