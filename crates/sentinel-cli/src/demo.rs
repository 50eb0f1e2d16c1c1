//! `sentinel demo`: a simulated gold crash through the real news, model and
//! push path.

use rust_decimal::Decimal;
use sentinel_core::{AppConfig, AssetConfig, PriceSnapshot, WatchlistFile};
use sentinel_notify::AlertReport;

use crate::run::Sentinel;

const DEMO_SYMBOL: &str = "IAU";

/// `IAU` when configured, otherwise the first watchlist asset.
pub(crate) fn demo_asset(watchlist: &WatchlistFile) -> Option<&AssetConfig> {
    watchlist
        .asset(DEMO_SYMBOL)
        .or_else(|| watchlist.assets.first())
}

/// A 6.5% one-day, 8.2% three-day drop.
pub(crate) fn crash_snapshot(symbol: &str) -> PriceSnapshot {
    PriceSnapshot::new(
        symbol,
        Decimal::new(18050, 2),
        Decimal::new(-650, 2),
        Decimal::new(-820, 2),
    )
}

fn print_report(report: &AlertReport) {
    let analysis = &report.analysis;
    let rule = "=".repeat(40);
    println!("\n{rule}\n AI ANALYSIS RESULT\n{rule}");
    println!("Type: {}", analysis.news_type.as_str());
    println!("Confidence: {:?}", analysis.confidence);
    println!("Direction: {:?}", analysis.direction);
    println!("Key Driver: {}", analysis.key_driver);
    println!("Recommendation: {}", analysis.recommended_action);
    println!("Supporting Points:");
    for point in &analysis.supporting_points {
        println!("  - {point}");
    }
    println!("{rule}\n");
}

/// # Errors
///
/// Returns an error if the watchlist is empty or a client cannot be
/// constructed.
pub(crate) async fn run_demo(config: &AppConfig, watchlist: &WatchlistFile) -> anyhow::Result<()> {
    let asset = demo_asset(watchlist).ok_or_else(|| anyhow::anyhow!("watchlist has no assets"))?;
    let sentinel = Sentinel::new(config, watchlist.triggers.clone())?;

    println!(
        ">>> demo mode: simulating a crash in {} ({}) <<<",
        asset.name, asset.symbol
    );

    let snapshot = crash_snapshot(&asset.symbol);
    let trigger = sentinel.trigger_for(Some(&snapshot));
    if !trigger.is_triggered() {
        tracing::info!(symbol = %asset.symbol, "simulated move does not cross any trigger");
        return Ok(());
    }

    let Some(report) = sentinel.build_report(asset, trigger, snapshot).await else {
        tracing::error!(symbol = %asset.symbol, "demo analysis produced no report");
        return Ok(());
    };

    print_report(&report);
    let notified = sentinel.deliver(&report, false).await;
    tracing::info!(notified, "demo run complete");
    Ok(())
}
