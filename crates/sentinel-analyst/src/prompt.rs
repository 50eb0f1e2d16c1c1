//! Prompt text sent with every classification request.

use std::fmt::Write as _;

use sentinel_core::{AlertLevel, Language, NewsItem, PriceSnapshot};

pub(crate) const SYSTEM_PROMPT: &str = r#"You are a Commodity Risk Sentinel AI. Your job is to analyze price drops and news to classify market moves.
You will receive a list of de-duplicated news headlines.
You must return only strict JSON. No markdown, no explanations.

Output Schema:
{
  "asset": "string",
  "trigger_level": "L1|L2",
  "news_type": "emotional|structural|unclear",
  "direction": "bullish|bearish|neutral",
  "confidence": "low|medium|high",
  "key_driver": "short explanation",
  "recommended_action": "short actionable advice",
  "supporting_points": ["point 1", "point 2"],
  "news_used": [{"title": "", "source": "", "published_at": ""}]
}

Rules for 'recommended_action':
- If trigger is L2 AND news_type == emotional: "Potential contrarian opportunity (consider DCA)"
- If news_type == structural and bearish: "Do NOT buy against trend"
- If unclear: "Wait and monitor"

LANGUAGE INSTRUCTION:
- Check the 'Target Language' provided in the user prompt.
- If 'zh-TW', write 'key_driver', 'recommended_action', and 'supporting_points' in Traditional Chinese (Taiwanese usage).
- Keep 'trigger_level', 'news_type', 'direction', 'confidence' in English (as they are enum keys).
"#;

/// Render the per-asset request.
pub(crate) fn user_prompt(
    asset_name: &str,
    trigger: AlertLevel,
    snapshot: &PriceSnapshot,
    news: &[NewsItem],
    language: Language,
) -> String {
    let mut prompt = String::from("ANALYSIS REQUEST\n");
    let _ = writeln!(prompt, "Target Language: {}", language.code());
    let _ = writeln!(prompt, "Asset: {asset_name}");
    let _ = writeln!(prompt, "Trigger Level: {trigger}");
    let _ = writeln!(
        prompt,
        "Price Movement: 1D: {}%, 3D: {}%",
        snapshot.change_1d, snapshot.change_3d
    );
    let _ = writeln!(prompt, "Current Price: {}", snapshot.current_price);
    prompt.push_str("\nRecent News:\n");
    if news.is_empty() {
        prompt.push_str("- (no recent headlines found)\n");
    }
    for item in news {
        let _ = writeln!(
            prompt,
            "- [{}] {} ({})",
            item.published_at, item.title, item.source
        );
    }
    prompt.push_str(
        "\nTask: Classify if this move is EMOTIONAL (panic) or STRUCTURAL (fundamental).\n",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn snapshot() -> PriceSnapshot {
        PriceSnapshot::new(
            "IAU",
            Decimal::new(18050, 2),
            Decimal::new(-650, 2),
            Decimal::new(-820, 2),
        )
    }

    #[test]
    fn user_prompt_lists_moves_and_headlines() {
        let mut item = NewsItem::new("Gold slides", "https://example.com/g");
        item.source = "Reuters".to_string();
        item.published_at = "Mon, 19 Oct 2026 08:00:00 GMT".to_string();

        let prompt = user_prompt(
            "Gold",
            AlertLevel::L2,
            &snapshot(),
            &[item],
            Language::TraditionalChinese,
        );

        assert!(prompt.contains("Target Language: zh-TW"));
        assert!(prompt.contains("Asset: Gold"));
        assert!(prompt.contains("Trigger Level: L2"));
        assert!(prompt.contains("Price Movement: 1D: -6.50%, 3D: -8.20%"));
        assert!(prompt.contains("Current Price: 180.50"));
        assert!(prompt.contains("- [Mon, 19 Oct 2026 08:00:00 GMT] Gold slides (Reuters)"));
    }

    #[test]
    fn user_prompt_notes_missing_headlines() {
        let prompt = user_prompt("Gold", AlertLevel::L1, &snapshot(), &[], Language::English);
        assert!(prompt.contains("Target Language: en"));
        assert!(prompt.contains("no recent headlines"));
    }

    #[test]
    fn system_prompt_pins_enum_keys_and_actions() {
        assert!(SYSTEM_PROMPT.contains("emotional|structural|unclear"));
        assert!(SYSTEM_PROMPT.contains("Do NOT buy against trend"));
    }
}
