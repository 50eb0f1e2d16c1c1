//! RSS parsing for Google News search feeds.

use quick_xml::events::Event;
use quick_xml::Reader;
use sentinel_core::{NewsItem, UNKNOWN_SOURCE};

use crate::error::NewsError;

#[derive(Default)]
struct ItemBuilder {
    title: String,
    link: String,
    published_at: String,
    description: String,
    source: String,
}

impl ItemBuilder {
    fn set(&mut self, tag: &str, text: String) {
        match tag {
            "title" => self.title = text,
            "link" => self.link = text,
            "pubDate" => self.published_at = text,
            "source" => self.source = text,
            "description" => {
                if !self.description.is_empty() {
                    self.description.push(' ');
                }
                self.description.push_str(&text);
            }
            _ => {}
        }
    }

    fn build(self) -> Option<NewsItem> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return None;
        }
        let source = match self.source.trim() {
            "" => UNKNOWN_SOURCE.to_string(),
            s => s.to_string(),
        };
        Some(NewsItem {
            title,
            source,
            published_at: self.published_at.trim().to_string(),
            summary: strip_html(&self.description),
            link: self.link.trim().to_string(),
        })
    }
}

/// Parse an RSS XML feed into [`NewsItem`]s, in feed order.
///
/// Reads `<title>`, `<link>`, `<pubDate>`, `<description>`, and `<source>`
/// from each `<item>`. Items without a title are skipped. Stops once
/// `max_items` items have been collected.
///
/// # Errors
///
/// Returns [`NewsError::Xml`] if the XML is malformed.
pub fn parse_feed(xml: &str, max_items: usize) -> Result<Vec<NewsItem>, NewsError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<ItemBuilder> = None;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_string();
                if name == "item" {
                    current = Some(ItemBuilder::default());
                    current_tag.clear();
                } else if current_tag != "description" {
                    // Tags nested inside <description> keep feeding it.
                    current_tag = name;
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if name == "item" {
                    if let Some(item) = current.take().and_then(ItemBuilder::build) {
                        items.push(item);
                        if items.len() >= max_items {
                            break;
                        }
                    }
                }
                if current_tag == name {
                    current_tag.clear();
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(builder) = current.as_mut() {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    builder.set(&current_tag, text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(builder) = current.as_mut() {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    builder.set(&current_tag, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(NewsError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

/// Strip HTML tags from a string and normalize whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
