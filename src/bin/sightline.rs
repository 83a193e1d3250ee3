//! Sightline CLI.
//!
//! Reads an object name list from CSV, runs the proximity-and-luminosity
//! correlation over every target, and writes the aggregated
//! (luminosity, velocity) dataset as CSV.
//!
//! # Usage
//!
//! ```bash
//! sightline names.csv --output correlation.csv \
//!     --catalog-url https://catalog.example.org/lookup \
//!     --max-separation 1.0
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sightline::catalog::{CatalogCache, CatalogSource, MemoryCatalog, RemoteCatalog};
use sightline::io::{read_names, write_results};
use sightline::services::{correlate, ProximityParams};

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Correlate foreground luminosity with recession velocity")]
struct Cli {
    /// CSV file with a 'Name' column listing candidate objects
    names: PathBuf,

    /// Output CSV path for the aggregated dataset
    #[arg(short, long, default_value = "correlation.csv")]
    output: PathBuf,

    /// Optional separate target list; defaults to the candidate list
    #[arg(long)]
    targets: Option<PathBuf>,

    /// Base URL of the catalog lookup service
    #[arg(long, conflicts_with = "catalog_file")]
    catalog_url: Option<String>,

    /// Local JSON catalog snapshot, used instead of the remote service
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Maximum angular separation in degrees for a candidate to count as close
    #[arg(long, default_value = "1.0")]
    max_separation: f64,

    /// Minimum candidate redshift; candidates at or below it are excluded
    #[arg(long, default_value = "0.0")]
    min_redshift: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let candidates = read_names(&cli.names)?;
    let targets = match &cli.targets {
        Some(path) => read_names(path)?,
        None => candidates.clone(),
    };
    info!(
        candidates = candidates.len(),
        targets = targets.len(),
        "name lists loaded"
    );

    let source: Arc<dyn CatalogSource> = match (&cli.catalog_url, &cli.catalog_file) {
        (Some(url), None) => Arc::new(RemoteCatalog::new(url)?),
        (None, Some(path)) => Arc::new(MemoryCatalog::from_json_path(path)?),
        _ => anyhow::bail!("provide exactly one of --catalog-url or --catalog-file"),
    };
    let cache = CatalogCache::new(source);

    let params =
        ProximityParams::new(cli.max_separation).with_min_redshift(cli.min_redshift);
    let results = correlate(&cache, &targets, &candidates, &params).await;

    info!(
        retained_targets = results.len(),
        dropped_targets = targets.len() - results.len(),
        resolved_names = cache.len(),
        "correlation finished"
    );

    write_results(&cli.output, &results)?;
    info!(output = %cli.output.display(), "dataset written");

    Ok(())
}
