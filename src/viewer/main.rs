//! Interactive viewer: serves the boundary map and checks addresses.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use schoolzone::check::BoundaryChecker;
use schoolzone::config::Config;
use schoolzone::geocode;
use schoolzone::render::IconMap;
use schoolzone::store::{DatasetStore, FileStore};
use schoolzone::web::{router, AppState};

#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "School boundary map server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// TOML config file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Boundary GeoJSON file
    #[arg(long)]
    boundary: Option<PathBuf>,

    /// Schools GeoJSON file
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

    info!("Schoolzone Viewer");

    let store = FileStore::new(
        args.boundary.unwrap_or(config.data.boundary_path.clone()),
        args.schools.unwrap_or(config.data.schools_path.clone()),
    );

    // Fail fast on a missing or malformed boundary
    let boundary = store.load_boundary().context("Failed to load boundary")?;
    let schools = store.load_schools().context("Failed to load schools")?;

    let state = Arc::new(AppState {
        checker: BoundaryChecker::new(boundary),
        schools,
        icons: IconMap::new(&config.icons, config.map.icon_size),
        map: config.map.clone(),
        geocoder: geocode::from_config(&config.geocoder)?,
    });

    let app = router(state);

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
