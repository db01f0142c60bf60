//! Address resolution.
//!
//! Every provider reports failures (no match, timeouts, rate limiting,
//! garbage responses) as [`Resolution::NotFound`] so callers never have to
//! handle provider errors.

mod nominatim;
mod paced;
mod table;

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

pub use nominatim::NominatimGeocoder;
pub use paced::Paced;
pub use table::TableGeocoder;

use crate::config::{GeocoderConfig, GeocoderProvider};
use crate::models::Coordinate;

/// Why an address did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The provider answered but had no match
    NoMatch,
    /// HTTP 429 from the provider
    RateLimited,
    /// Transport error, timeout or non-success status
    Unavailable(String),
    /// Unparsable body or out-of-range coordinates
    InvalidResponse(String),
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::NoMatch => write!(f, "no match"),
            NotFoundReason::RateLimited => write!(f, "rate limited"),
            NotFoundReason::Unavailable(e) => write!(f, "provider unavailable: {}", e),
            NotFoundReason::InvalidResponse(e) => write!(f, "invalid response: {}", e),
        }
    }
}

/// Outcome of resolving one address
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Coordinate),
    NotFound(NotFoundReason),
}

impl Resolution {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Resolution::Found(c) => Some(*c),
            Resolution::NotFound(_) => None,
        }
    }
}

/// Resolves free-form addresses to coordinates
pub trait Geocoder: Send + Sync {
    fn resolve(&self, address: &str) -> impl Future<Output = Resolution> + Send;
}

/// The geocoder selected by [`GeocoderConfig::provider`]
pub enum ConfiguredGeocoder {
    Nominatim(NominatimGeocoder),
    Table(TableGeocoder),
}

impl Geocoder for ConfiguredGeocoder {
    async fn resolve(&self, address: &str) -> Resolution {
        match self {
            ConfiguredGeocoder::Nominatim(g) => g.resolve(address).await,
            ConfiguredGeocoder::Table(g) => g.resolve(address).await,
        }
    }
}

/// Build the configured provider, wrapped in the rate-limit pacer
pub fn from_config(config: &GeocoderConfig) -> Result<Paced<ConfiguredGeocoder>> {
    let inner = match config.provider {
        GeocoderProvider::Nominatim => {
            info!("Geocoding with Nominatim at {}", config.endpoint);
            ConfiguredGeocoder::Nominatim(NominatimGeocoder::new(
                config.endpoint.clone(),
                &config.user_agent,
                Duration::from_secs(config.timeout_secs),
            )?)
        }
        GeocoderProvider::Table => {
            info!(
                "Geocoding from a fixed table of {} addresses",
                config.fixtures.len()
            );
            ConfiguredGeocoder::Table(TableGeocoder::from_entries(
                config
                    .fixtures
                    .iter()
                    .map(|f| (f.address.clone(), f.coordinate())),
            ))
        }
    };

    Ok(Paced::new(
        inner,
        Duration::from_millis(config.min_interval_ms),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixtureEntry;

    #[tokio::test]
    async fn test_table_provider_from_config() {
        let config = GeocoderConfig {
            provider: GeocoderProvider::Table,
            min_interval_ms: 0,
            fixtures: vec![FixtureEntry {
                address: "1 Main St".to_string(),
                lon: -111.8,
                lat: 33.3,
            }],
            ..GeocoderConfig::default()
        };
        let geocoder = from_config(&config).unwrap();

        assert_eq!(
            geocoder.resolve("1 Main St").await,
            Resolution::Found(Coordinate::new(-111.8, 33.3))
        );
        assert_eq!(
            geocoder.resolve("2 Main St").await,
            Resolution::NotFound(NotFoundReason::NoMatch)
        );
    }
}
