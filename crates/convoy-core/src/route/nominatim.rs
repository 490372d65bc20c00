//! Nominatim geocoding client

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use super::Geocoder;
use crate::{
    error::{Result, ResultExt},
    models::Coordinates,
};

/// Public OpenStreetMap Nominatim instance
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Nominatim geocoding client
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    client: reqwest::Client,
}

impl NominatimGeocoder {
    /// Create a new client against the given Nominatim base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Convoy-ELD/", env!("CARGO_PKG_VERSION")))
            .build()
            .config_context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        debug!("Geocoding '{address}' via {}", self.base_url);

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .route_context(format!("Failed to send geocoding request for '{address}'"))?;

        if !response.status().is_success() {
            warn!("Nominatim answered {} for '{address}'", response.status());
            return Ok(None);
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .route_context("Failed to parse geocoding response")?;

        let Some(place) = places.first() else {
            return Ok(None);
        };

        let lat: f64 = place.lat.parse().route_context("Invalid latitude")?;
        let lon: f64 = place.lon.parse().route_context("Invalid longitude")?;
        Ok(Some(Coordinates::new(lat, lon)))
    }

    fn name(&self) -> &'static str {
        "nominatim"
    }
}
