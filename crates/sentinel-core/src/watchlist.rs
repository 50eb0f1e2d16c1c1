//! Watchlist file: the assets to check and the trigger thresholds.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::trigger::TriggerThresholds;
use crate::ConfigError;

/// One watched asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    /// Market-data ticker, e.g. `IAU`.
    pub symbol: String,
    /// Display name passed to the analyst and shown in alerts.
    pub name: String,
    /// News search query.
    pub query: String,
}

#[derive(Debug, Deserialize)]
struct AssetEntry {
    name: String,
    query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistFile {
    /// Assets in file order. Written as a mapping keyed by symbol.
    #[serde(deserialize_with = "assets_in_order")]
    pub assets: Vec<AssetConfig>,
    #[serde(default)]
    pub triggers: TriggerThresholds,
}

impl WatchlistFile {
    /// Look up an asset by symbol, case-insensitively.
    #[must_use]
    pub fn asset(&self, symbol: &str) -> Option<&AssetConfig> {
        self.assets
            .iter()
            .find(|a| a.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// Load and validate the watchlist from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watchlist(path: &Path) -> Result<WatchlistFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchlistIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_watchlist(&content)
}

/// Parse and validate watchlist YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_watchlist(yaml: &str) -> Result<WatchlistFile, ConfigError> {
    let watchlist: WatchlistFile =
        serde_yaml::from_str(yaml).map_err(ConfigError::WatchlistParse)?;
    validate_watchlist(&watchlist)?;
    Ok(watchlist)
}

fn validate_watchlist(watchlist: &WatchlistFile) -> Result<(), ConfigError> {
    if watchlist.assets.is_empty() {
        return Err(ConfigError::Validation(
            "watchlist must contain at least one asset".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for asset in &watchlist.assets {
        if asset.symbol.trim().is_empty() {
            return Err(ConfigError::Validation(
                "asset symbol must be non-empty".to_string(),
            ));
        }
        if asset.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "asset '{}' has an empty name",
                asset.symbol
            )));
        }
        if asset.query.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "asset '{}' has an empty news query",
                asset.symbol
            )));
        }
        if !seen.insert(asset.symbol.to_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate asset symbol: '{}'",
                asset.symbol
            )));
        }
    }

    Ok(())
}

fn assets_in_order<'de, D>(deserializer: D) -> Result<Vec<AssetConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AssetsVisitor;

    impl<'de> Visitor<'de> for AssetsVisitor {
        type Value = Vec<AssetConfig>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of symbol to { name, query }")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut assets = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((symbol, entry)) = map.next_entry::<String, AssetEntry>()? {
                assets.push(AssetConfig {
                    symbol,
                    name: entry.name,
                    query: entry.query,
                });
            }
            Ok(assets)
        }
    }

    deserializer.deserialize_map(AssetsVisitor)
}

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod tests;
