mod demo;
mod run;

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "sentinel")]
#[command(about = "Commodity risk sentinel: price drawdown alerts with news classification")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check every watchlist asset and alert on triggered drawdowns
    Run {
        /// Check only this symbol
        #[arg(long)]
        asset: Option<String>,

        /// Print alert reports as JSON instead of pushing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Force a simulated crash through the full pipeline
    Demo,
}

/// Open `path` for appending, creating it and its parent directory if needed.
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Logs go to stderr and, when configured, to a plain-text log file.
fn init_tracing(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    let file_layer = log_file
        .map(open_log_file)
        .transpose()?
        .map(|file| fmt::layer().with_ansi(false).with_writer(std::sync::Mutex::new(file)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = sentinel_core::load_app_config()?;
    init_tracing(&config.log_level, config.log_file.as_deref())?;

    let watchlist = sentinel_core::load_watchlist(&config.config_path)?;
    tracing::debug!(?config, assets = watchlist.assets.len(), "configuration loaded");

    match cli.command {
        Some(Commands::Run { asset, dry_run }) => {
            run::run_sentinel(&config, &watchlist, asset.as_deref(), dry_run).await?;
        }
        None => {
            run::run_sentinel(&config, &watchlist, None, false).await?;
        }
        Some(Commands::Demo) => demo::run_demo(&config, &watchlist).await?,
    }

    Ok(())
}
