//! tr-export - fetch wells for a TR and write the percentile production CSV
//!
//! Drives the explorer store end-to-end against the configured backend:
//! select a TR, apply optional filters, aggregate P10/P50/P90 production,
//! and write the date-stamped CSV.
//!
//! # Usage
//!
//! ```bash
//! tr-export --tr 3N65W --radius 10 --out ./exports
//! tr-export --tr 3N65W --operator "Alpha Oil" --formation Niobrara
//! ```
//!
//! # Environment Variables
//!
//! - `TR_EXPLORER_CONFIG`: Path to explorer.toml (default: ./explorer.toml)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use tr_well_explorer::{config, export, ExplorerConfig, HttpBackend, MapStore};

#[derive(Parser, Debug)]
#[command(name = "tr-export")]
#[command(about = "Export P10/P50/P90 production for wells around a TR cell")]
#[command(version)]
struct CliArgs {
    /// Township/range identifier to select, e.g. 3N65W
    #[arg(long)]
    tr: String,

    /// Search radius in miles (default: from config)
    #[arg(long)]
    radius: Option<f64>,

    /// Output directory for the CSV
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Restrict to an operator (repeatable)
    #[arg(long = "operator")]
    operators: Vec<String>,

    /// Restrict to a formation/interval (repeatable)
    #[arg(long = "formation")]
    formations: Vec<String>,

    /// Minimum lateral length, feet
    #[arg(long)]
    min_lateral: Option<f64>,

    /// Maximum lateral length, feet
    #[arg(long)]
    max_lateral: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let cfg = ExplorerConfig::load();
    config::init(cfg.clone());

    let backend = HttpBackend::from_config(&cfg.backend).context("building HTTP backend")?;
    info!(backend = %backend.base_url(), tr = %args.tr, "Starting export");

    let store = MapStore::new(backend, &cfg);

    if let Some(radius) = args.radius {
        // No selection yet, so this only records the radius.
        store.set_radius(radius).await.context("setting radius")?;
    }

    store
        .select_tr(&args.tr)
        .await
        .with_context(|| format!("fetching wells for TR {}", args.tr))?;

    store.set_operators(args.operators).await;
    store.set_formations(args.formations).await;
    if args.min_lateral.is_some() || args.max_lateral.is_some() {
        store
            .set_lateral_range(
                args.min_lateral.unwrap_or(cfg.map.min_lateral_ft),
                args.max_lateral.unwrap_or(cfg.map.max_lateral_ft),
            )
            .await;
    }

    let filtered = store.filtered_wells().await;
    info!(wells = filtered.len(), "Filter applied");

    let chart = store
        .refresh_production()
        .await
        .context("fetching aggregate production")?
        .context("production refresh superseded — nothing to export")?;

    if chart.is_empty() {
        bail!("no production data for the filtered well set");
    }

    let path = export::write_percentile_csv(&chart, &args.out)
        .context("writing percentile CSV")?;

    info!(path = %path.display(), months = chart.months.len(), "Export complete");
    Ok(())
}
