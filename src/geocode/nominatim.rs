//! Nominatim (OpenStreetMap) geocoding client.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::{Geocoder, NotFoundReason, Resolution};
use crate::models::Coordinate;

/// Geocodes addresses through the Nominatim `/search` endpoint
pub struct NominatimGeocoder {
    client: Client,
    search_url: Url,
}

/// One hit of a `format=jsonv2` search. Nominatim sends coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(endpoint: Url, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        // Keeps any base path, e.g. `/nominatim/search`
        let mut search_url = endpoint.clone();
        search_url
            .path_segments_mut()
            .map_err(|_| anyhow!("Invalid Nominatim endpoint {}", endpoint))?
            .pop_if_empty()
            .push("search");

        Ok(Self { client, search_url })
    }

    fn request_url(&self, address: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        url
    }

    async fn lookup(&self, address: &str) -> Resolution {
        let response = match self.client.get(self.request_url(address)).send().await {
            Ok(r) => r,
            Err(e) => return Resolution::NotFound(NotFoundReason::Unavailable(e.to_string())),
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Resolution::NotFound(NotFoundReason::RateLimited);
        }
        if !status.is_success() {
            return Resolution::NotFound(NotFoundReason::Unavailable(format!("HTTP {}", status)));
        }

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                return Resolution::NotFound(NotFoundReason::InvalidResponse(e.to_string()))
            }
        };

        match places.into_iter().next() {
            Some(place) => parse_place(&place),
            None => Resolution::NotFound(NotFoundReason::NoMatch),
        }
    }
}

fn parse_place(place: &NominatimPlace) -> Resolution {
    let (lon, lat) = match (place.lon.trim().parse::<f64>(), place.lat.trim().parse::<f64>()) {
        (Ok(lon), Ok(lat)) => (lon, lat),
        _ => {
            return Resolution::NotFound(NotFoundReason::InvalidResponse(format!(
                "unparsable coordinates lat={:?} lon={:?}",
                place.lat, place.lon
            )))
        }
    };

    let coordinate = Coordinate::new(lon, lat);
    if !coordinate.is_valid() {
        return Resolution::NotFound(NotFoundReason::InvalidResponse(format!(
            "coordinates out of range {}",
            coordinate
        )));
    }

    debug!(
        "Resolved to {} ({})",
        coordinate,
        place.display_name.as_deref().unwrap_or("unnamed")
    );
    Resolution::Found(coordinate)
}

impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, address: &str) -> Resolution {
        let resolution = self.lookup(address).await;
        if let Resolution::NotFound(reason) = &resolution {
            warn!("Address not found: {} ({})", address, reason);
        }
        resolution
    }
}
