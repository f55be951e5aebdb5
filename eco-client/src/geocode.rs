//! One-shot address geocoding
//!
//! Resolves a free-text pickup address to coordinates via a
//! Nominatim-compatible `/search` endpoint. One lookup per address; this is
//! never polled.

use serde::Deserialize;
use shared::models::Coordinates;

use crate::{ClientConfig, ClientError, ClientResult};

/// Nominatim returns lat/lon as strings
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Geocoding client
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new geocoding client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.geocode_url.clone(),
        }
    }

    /// Look up a free-text address, returning `None` when the service has no
    /// match for it.
    pub async fn lookup(&self, address: &str) -> ClientResult<Option<Coordinates>> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let places: Vec<Place> = self
            .client
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(place) = places.first() else {
            return Ok(None);
        };

        let latitude: f64 = place.lat.parse().map_err(|_| {
            ClientError::InvalidResponse(format!("unparseable latitude: {}", place.lat))
        })?;
        let longitude: f64 = place.lon.parse().map_err(|_| {
            ClientError::InvalidResponse(format!("unparseable longitude: {}", place.lon))
        })?;

        Ok(Some(Coordinates {
            latitude,
            longitude,
        }))
    }
}
