//! Shared types, configuration, and the pure decision logic for the
//! commodity risk sentinel.
//!
//! The similarity scorer and trigger evaluator live here because every other
//! crate in the workspace depends on them and neither performs I/O.

pub mod app_config;
pub mod config;
pub mod error;
pub mod similarity;
pub mod trigger;
pub mod types;
pub mod watchlist;

pub use app_config::{AppConfig, Language, LineCredentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use similarity::similarity;
pub use trigger::{evaluate, evaluate_snapshot, LevelThresholds, TriggerThresholds, UNSET_FLOOR};
pub use types::{AlertLevel, NewsItem, PriceSnapshot, UNKNOWN_SOURCE};
pub use watchlist::{load_watchlist, parse_watchlist, AssetConfig, WatchlistFile};
