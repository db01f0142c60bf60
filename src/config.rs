//! TOML configuration shared by the `generate` and `viewer` binaries.
//!
//! Every section has defaults, so an empty file (or no file) yields the
//! Chandler, AZ school list and map settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use crate::models::{Coordinate, SchoolEntry};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub geocoder: GeocoderConfig,
    pub map: MapConfig,
    pub schools: Vec<SchoolEntry>,
    pub icons: Vec<IconEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub boundary_path: PathBuf,
    pub schools_path: PathBuf,
    pub boundary_name: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeocoderProvider {
    #[default]
    Nominatim,
    /// Fixed address table from `fixtures`, no network access
    Table,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub provider: GeocoderProvider,
    pub endpoint: Url,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Minimum delay between the start of two geocoding calls
    pub min_interval_ms: u64,
    pub fixtures: Vec<FixtureEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixtureEntry {
    pub address: String,
    pub lon: f64,
    pub lat: f64,
}

impl FixtureEntry {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub title: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    /// Edge length in pixels of custom school icons
    pub icon_size: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub address: String,
    pub url: String,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load from `path` if given, else the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            geocoder: GeocoderConfig::default(),
            map: MapConfig::default(),
            schools: default_schools(),
            icons: default_icons(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            boundary_path: PathBuf::from("rectangle_boundary.geojson"),
            schools_path: PathBuf::from("schools.geojson"),
            boundary_name: "School Boundary".to_string(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: GeocoderProvider::default(),
            endpoint: default_endpoint(),
            user_agent: "school_boundary_app".to_string(),
            timeout_secs: 10,
            min_interval_ms: 1000,
            fixtures: Vec::new(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Arizona School Boundary Map".to_string(),
            center_lat: 33.3062,
            center_lon: -111.8413,
            zoom: 11,
            icon_size: 50,
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse("https://nominatim.openstreetmap.org/").expect("static URL is valid")
}

fn default_schools() -> Vec<SchoolEntry> {
    [
        ("Bologna Elementary", "1625 E. Frye Rd., Chandler, AZ"),
        ("School 2", "5990 S. Val Vista Drive, Chandler, AZ 85249"),
        ("School 3", "1205 E. Frye Rd, Chandler, AZ"),
        ("School 4", "24901 S. Power Rd. Queen Creek, AZ 85142"),
        ("School 5", "2626 E. Pecos Road, Chandler, AZ 85225"),
        ("School 6", "3700 S. Arizona Avenue, Chandler, AZ 85248"),
        ("School 7", "290 S. Cooper Road, Chandler, AZ 85225"),
        ("School 8", "1919 E. Queen Creek, Gilbert, AZ 85297"),
    ]
    .into_iter()
    .map(|(name, address)| SchoolEntry::new(name, address))
    .collect()
}

fn default_icons() -> Vec<IconEntry> {
    [
        (
            "1625 E. Frye Rd., Chandler, AZ",
            "https://www.cusd80.com/cms/lib/AZ01001175/Centricity/Template/GlobalAssets/images//School-logos-header/Bologna-Elementary.png",
        ),
        ("5990 S. Val Vista Drive, Chandler, AZ 85249", "https://example.com/logo2.png"),
        ("1205 E. Frye Rd, Chandler, AZ", "https://example.com/logo3.png"),
        ("24901 S. Power Rd. Queen Creek, AZ 85142", "https://example.com/logo4.png"),
    ]
    .into_iter()
    .map(|(address, url)| IconEntry {
        address: address.to_string(),
        url: url.to_string(),
    })
    .collect()
}
