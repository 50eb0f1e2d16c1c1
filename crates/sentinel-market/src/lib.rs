//! Price history retrieval and drawdown snapshots.

pub mod error;
pub mod snapshot;

mod client;
mod wire;

pub use client::MarketClient;
pub use error::MarketError;
pub use snapshot::{snapshot_from_closes, MIN_CLOSES};
