//! Drawdown trigger evaluation.
//!
//! Level 2 is checked first and wins over level 1. Level 1 only looks at the
//! one-day move; the three-day move never produces an L1 alert.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AlertLevel, PriceSnapshot};

/// Floor used for a threshold that is not configured. No real move reaches it.
pub const UNSET_FLOOR: Decimal = Decimal::from_parts(99, 0, 0, true, 0);

/// Floors for one alert level. A move at or below a floor fires the level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    #[serde(default)]
    pub change_1d: Option<Decimal>,
    #[serde(default)]
    pub change_3d: Option<Decimal>,
}

impl LevelThresholds {
    fn floor_1d(&self) -> Decimal {
        self.change_1d.unwrap_or(UNSET_FLOOR)
    }

    fn floor_3d(&self) -> Decimal {
        self.change_3d.unwrap_or(UNSET_FLOOR)
    }
}

/// Two-level trigger configuration, read once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerThresholds {
    #[serde(default)]
    pub level_1: LevelThresholds,
    #[serde(default)]
    pub level_2: LevelThresholds,
}

/// Classify a price move.
#[must_use]
pub fn evaluate(change_1d: Decimal, change_3d: Decimal, thresholds: &TriggerThresholds) -> AlertLevel {
    let l2 = &thresholds.level_2;
    if change_1d <= l2.floor_1d() || change_3d <= l2.floor_3d() {
        return AlertLevel::L2;
    }

    if change_1d <= thresholds.level_1.floor_1d() {
        return AlertLevel::L1;
    }

    AlertLevel::None
}

/// Classify a snapshot, treating a missing one as no trigger.
#[must_use]
pub fn evaluate_snapshot(
    snapshot: Option<&PriceSnapshot>,
    thresholds: &TriggerThresholds,
) -> AlertLevel {
    match snapshot {
        Some(snap) => evaluate(snap.change_1d, snap.change_3d, thresholds),
        None => AlertLevel::None,
    }
}
