use sentinel_core::NewsItem;
use sentinel_news::resolve_link;

use crate::types::AnalysisResult;

/// Fill each `news_used` entry's link from the closest fetched headline.
///
/// Any link the model supplied is replaced; echoed URLs are not trusted.
pub fn attach_links(result: &mut AnalysisResult, items: &[NewsItem]) {
    for used in &mut result.news_used {
        used.link = Some(resolve_link(&used.title, items));
    }
}
