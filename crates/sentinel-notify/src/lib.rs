//! Alert delivery over the LINE Messaging API.

pub mod error;
pub mod flex;
pub mod report;

mod client;

pub use client::LineClient;
pub use error::NotifyError;
pub use flex::{alt_text, build_flex_message, MAX_NEWS_LINES, NEWS_FALLBACK_URI};
pub use report::AlertReport;
