//! Batch generator for the boundary and school datasets.
//!
//! Geocodes the configured school list, derives the bounding rectangle and
//! writes both GeoJSON files for the viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use schoolzone::batch::BatchGenerator;
use schoolzone::config::Config;
use schoolzone::geocode;
use schoolzone::render::IconMap;
use schoolzone::store::FileStore;

#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Geocode school addresses and write the boundary and school GeoJSON files")]
struct Args {
    /// TOML config file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path for the boundary file
    #[arg(long)]
    boundary: Option<PathBuf>,

    /// Output path for the schools file
    #[arg(long)]
    schools: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load_or_default(args.config.as_deref())?;

    let store = FileStore::new(
        args.boundary.unwrap_or(config.data.boundary_path.clone()),
        args.schools.unwrap_or(config.data.schools_path.clone()),
    );
    let geocoder = geocode::from_config(&config.geocoder)?;
    let icons = IconMap::new(&config.icons, config.map.icon_size);

    info!("Schoolzone Generate");
    info!("{} schools configured", config.schools.len());

    let pb = ProgressBar::new(config.schools.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let summary = BatchGenerator::new(&geocoder, &store, &icons)
        .boundary_name(config.data.boundary_name.clone())
        .run(&config.schools, &pb)
        .await
        .context("Batch generation failed")?;

    pb.finish_with_message("Geocoding complete");

    if !summary.skipped.is_empty() {
        warn!(
            "{} of {} schools not geocoded",
            summary.skipped.len(),
            config.schools.len()
        );
    }

    info!(
        "GeoJSON files created: {} and {}",
        store.boundary_path().display(),
        store.schools_path().display()
    );

    Ok(())
}
