//! Chat-model classification of triggered price moves, with the fixed
//! recommendation policy applied on top of the model's answer.

pub mod error;
pub mod links;
pub mod recommendation;
pub mod types;

mod client;
mod prompt;

pub use client::{AnalystClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::AnalystError;
pub use links::attach_links;
pub use recommendation::{override_recommendation, policy_action};
pub use types::{AnalysisResult, Confidence, Direction, NewsType, NewsUsed};
