//! Resolved route types shared by resolvers and the trip service.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in decimal degrees, serialized as `[lat, lon]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coordinates: Coordinates) -> Self {
        [coordinates.lat, coordinates.lon]
    }
}

/// Distance and duration of the whole trip, current location through pickup
/// to dropoff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedRoute {
    /// Road distance in miles
    pub distance: f64,

    /// Estimated driving time in hours
    pub duration: f64,

    /// Waypoints in travel order; empty when the resolver has no geometry
    #[serde(default)]
    pub coordinates: Vec<Coordinates>,
}
