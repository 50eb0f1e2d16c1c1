//! LINE Flex Message layout for a risk alert.

use sentinel_core::Language;
use serde_json::{json, Value};

use crate::report::AlertReport;

/// Used when a headline has no resolved link.
pub const NEWS_FALLBACK_URI: &str = "https://news.google.com";

/// Headlines shown in one bubble.
pub const MAX_NEWS_LINES: usize = 3;

const HEADER_COLOR: &str = "#D32F2F";
const ACTION_COLOR: &str = "#009688";
const LINK_COLOR: &str = "#0066cc";

struct Labels {
    risk: &'static str,
    price: &'static str,
    market_type: &'static str,
    action: &'static str,
    news: &'static str,
}

impl Labels {
    fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                risk: "RISK ALERT",
                price: "Current Price",
                market_type: "Market Type",
                action: "Action",
                news: "Top News",
            },
            Language::TraditionalChinese => Self {
                risk: "風險警報",
                price: "當前價格",
                market_type: "市場類型",
                action: "建議行動",
                news: "焦點新聞",
            },
        }
    }
}

/// Alternative text shown in chat lists and on clients without Flex support.
#[must_use]
pub fn alt_text(report: &AlertReport) -> String {
    format!("🚨 {} Risk Alert", report.analysis.asset)
}

/// Build the Flex "bubble" container for `report`.
#[must_use]
pub fn build_flex_message(report: &AlertReport, language: Language) -> Value {
    let labels = Labels::for_language(language);
    let analysis = &report.analysis;
    let price = &report.price_data;

    let mut body = vec![
        json!({
            "type": "box",
            "layout": "vertical",
            "margin": "md",
            "contents": [
                {"type": "text", "text": labels.price, "size": "xs", "color": "#aaaaaa"},
                {
                    "type": "text",
                    "text": format!(
                        "{} (1D: {}% | 3D: {}%)",
                        price.current_price, price.change_1d, price.change_3d
                    ),
                    "weight": "bold",
                    "size": "md"
                }
            ]
        }),
        json!({"type": "separator", "margin": "lg"}),
        json!({
            "type": "box",
            "layout": "vertical",
            "margin": "lg",
            "contents": [
                {
                    "type": "text",
                    "text": format!(
                        "{}: {}",
                        labels.market_type,
                        analysis.news_type.as_str().to_uppercase()
                    ),
                    "size": "sm",
                    "weight": "bold",
                    "color": "#333333"
                },
                {
                    "type": "text",
                    "text": non_empty(&analysis.key_driver),
                    "size": "xs",
                    "color": "#666666",
                    "wrap": true,
                    "margin": "xs"
                }
            ]
        }),
        json!({
            "type": "box",
            "layout": "vertical",
            "margin": "lg",
            "backgroundColor": "#F5F5F5",
            "cornerRadius": "md",
            "paddingAll": "md",
            "contents": [
                {"type": "text", "text": labels.action, "size": "xs", "color": "#aaaaaa"},
                {
                    "type": "text",
                    "text": non_empty(&analysis.recommended_action),
                    "size": "sm",
                    "weight": "bold",
                    "color": ACTION_COLOR,
                    "wrap": true
                }
            ]
        }),
    ];

    if !analysis.news_used.is_empty() {
        body.push(json!({
            "type": "text",
            "text": labels.news,
            "weight": "bold",
            "size": "sm",
            "margin": "lg",
            "color": "#555555"
        }));
        for used in analysis.news_used.iter().take(MAX_NEWS_LINES) {
            let uri = used
                .link
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or(NEWS_FALLBACK_URI);
            body.push(json!({
                "type": "text",
                "text": format!("• {} ({})", non_empty(&used.title), used.source),
                "size": "xs",
                "color": LINK_COLOR,
                "wrap": true,
                "margin": "sm",
                "action": {"type": "uri", "label": "Read", "uri": uri}
            }));
        }
    }

    json!({
        "type": "bubble",
        "header": {
            "type": "box",
            "layout": "vertical",
            "backgroundColor": HEADER_COLOR,
            "contents": [{
                "type": "text",
                "text": format!("{} {} ({})", analysis.asset, labels.risk, analysis.trigger_level),
                "weight": "bold",
                "color": "#FFFFFF",
                "size": "lg"
            }]
        },
        "body": {
            "type": "box",
            "layout": "vertical",
            "contents": body
        }
    })
}

// Flex rejects text components with an empty string.
fn non_empty(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}
