//! The per-asset check pipeline shared by `run` and `demo`.

use sentinel_analyst::AnalystClient;
use sentinel_core::{
    evaluate_snapshot, AlertLevel, AppConfig, AssetConfig, Language, PriceSnapshot,
    TriggerThresholds, WatchlistFile,
};
use sentinel_market::MarketClient;
use sentinel_news::NewsClient;
use sentinel_notify::{AlertReport, LineClient};

/// What happened to one asset during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssetOutcome {
    /// No usable price data.
    Skipped,
    Normal,
    Triggered { notified: bool },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub checked: usize,
    pub skipped: usize,
    pub triggered: usize,
    pub notified: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: AssetOutcome) {
        self.checked += 1;
        match outcome {
            AssetOutcome::Skipped => self.skipped += 1,
            AssetOutcome::Normal => {}
            AssetOutcome::Triggered { notified } => {
                self.triggered += 1;
                if notified {
                    self.notified += 1;
                }
            }
        }
    }
}

/// Clients and settings for one run.
pub(crate) struct Sentinel {
    market: MarketClient,
    news: NewsClient,
    analyst: AnalystClient,
    line: Option<LineClient>,
    language: Language,
    thresholds: TriggerThresholds,
}

impl Sentinel {
    /// # Errors
    ///
    /// Returns an error if any HTTP client cannot be constructed.
    pub(crate) fn new(config: &AppConfig, thresholds: TriggerThresholds) -> anyhow::Result<Self> {
        let timeout = config.request_timeout_secs;
        let line = config
            .line
            .clone()
            .map(|creds| LineClient::new(creds, timeout))
            .transpose()?;

        Ok(Self {
            market: MarketClient::new(timeout)?,
            news: NewsClient::new(timeout)?,
            analyst: AnalystClient::new(
                &config.openai_api_key,
                &config.openai_model,
                &config.openai_base_url,
                timeout,
            )?,
            line,
            language: config.language,
            thresholds,
        })
    }

    pub(crate) fn trigger_for(&self, snapshot: Option<&PriceSnapshot>) -> AlertLevel {
        evaluate_snapshot(snapshot, &self.thresholds)
    }

    /// Full pipeline for one asset with live prices.
    pub(crate) async fn check_asset(&self, asset: &AssetConfig, dry_run: bool) -> AssetOutcome {
        tracing::info!(symbol = %asset.symbol, name = %asset.name, "checking asset");

        let snapshot = match self.market.fetch_snapshot(&asset.symbol).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(symbol = %asset.symbol, error = %e, "price fetch failed");
                None
            }
        };

        let trigger = self.trigger_for(snapshot.as_ref());
        let (snapshot, trigger) = match screen(snapshot, trigger) {
            Ok(alert) => alert,
            Err(outcome) => {
                if outcome == AssetOutcome::Normal {
                    tracing::info!(symbol = %asset.symbol, "no trigger, market normal");
                }
                return outcome;
            }
        };

        let Some(report) = self.build_report(asset, trigger, snapshot).await else {
            return AssetOutcome::Triggered { notified: false };
        };
        let notified = self.deliver(&report, dry_run).await;
        AssetOutcome::Triggered { notified }
    }

    /// Fetch headlines and classify a triggered move. `None` when the
    /// classification fails.
    pub(crate) async fn build_report(
        &self,
        asset: &AssetConfig,
        trigger: AlertLevel,
        snapshot: PriceSnapshot,
    ) -> Option<AlertReport> {
        tracing::warn!(
            symbol = %asset.symbol,
            %trigger,
            change_1d = %snapshot.change_1d,
            change_3d = %snapshot.change_3d,
            "trigger fired"
        );

        let news = match self.news.recent_news(&asset.query).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    symbol = %asset.symbol,
                    error = %e,
                    "news fetch failed, classifying without headlines"
                );
                Vec::new()
            }
        };

        match self
            .analyst
            .analyze(&asset.name, trigger, &snapshot, &news, self.language)
            .await
        {
            Ok(analysis) => {
                tracing::info!(
                    symbol = %asset.symbol,
                    news_type = analysis.news_type.as_str(),
                    action = %analysis.recommended_action,
                    "analysis result"
                );
                Some(AlertReport::new(analysis, snapshot))
            }
            Err(e) => {
                tracing::error!(symbol = %asset.symbol, error = %e, "analysis failed");
                None
            }
        }
    }

    /// Push `report`, or print it when `dry_run` is set. Returns `true` only
    /// when a push succeeded.
    pub(crate) async fn deliver(&self, report: &AlertReport, dry_run: bool) -> bool {
        if dry_run {
            match serde_json::to_string_pretty(report) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!(error = %e, "failed to render alert report"),
            }
            return false;
        }

        let Some(line) = &self.line else {
            tracing::warn!("LINE credentials not set, notification skipped");
            return false;
        };

        match line.push(report, self.language).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    asset = %report.analysis.asset,
                    error = %e,
                    "failed to send LINE notification"
                );
                false
            }
        }
    }
}

/// Split a fetched snapshot into something to alert on, or the outcome
/// that ends the asset's check.
pub(crate) fn screen(
    snapshot: Option<PriceSnapshot>,
    trigger: AlertLevel,
) -> Result<(PriceSnapshot, AlertLevel), AssetOutcome> {
    match snapshot {
        None => Err(AssetOutcome::Skipped),
        Some(_) if !trigger.is_triggered() => Err(AssetOutcome::Normal),
        Some(snapshot) => Ok((snapshot, trigger)),
    }
}

/// Assets to check, in watchlist order.
///
/// # Errors
///
/// Returns an error if `filter` names a symbol not in the watchlist.
pub(crate) fn select_assets<'a>(
    watchlist: &'a WatchlistFile,
    filter: Option<&str>,
) -> anyhow::Result<Vec<&'a AssetConfig>> {
    match filter {
        Some(symbol) => {
            let asset = watchlist
                .asset(symbol)
                .ok_or_else(|| anyhow::anyhow!("asset '{symbol}' not found in watchlist"))?;
            Ok(vec![asset])
        }
        None => Ok(watchlist.assets.iter().collect()),
    }
}

/// Check every selected asset in order. Per-asset failures are logged and
/// never abort the run.
///
/// # Errors
///
/// Returns an error if the asset filter is unknown or a client cannot be
/// constructed.
pub(crate) async fn run_sentinel(
    config: &AppConfig,
    watchlist: &WatchlistFile,
    asset_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<RunSummary> {
    let assets = select_assets(watchlist, asset_filter)?;
    let sentinel = Sentinel::new(config, watchlist.triggers.clone())?;

    tracing::info!(assets = assets.len(), dry_run, "starting sentinel run");

    let mut summary = RunSummary::default();
    for asset in assets {
        summary.record(sentinel.check_asset(asset, dry_run).await);
    }

    tracing::info!(
        checked = summary.checked,
        skipped = summary.skipped,
        triggered = summary.triggered,
        notified = summary.notified,
        "run complete"
    );
    Ok(summary)
}
