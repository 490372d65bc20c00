//! Route resolution for the trip service.
//!
//! The stop planner only ever sees a distance in miles. Turning addresses into
//! that distance is the job of a [`RouteResolver`], injected into
//! [`crate::service::TripService`]:
//!
//! - [`FixedRoute`]: a known distance, no network. Used by tests and offline
//!   runs.
//! - [`GeocodingRouteResolver`]: geocodes the current, pickup and dropoff
//!   addresses with any [`Geocoder`] and estimates road distance as the
//!   great-circle legs times [`geo::ROAD_FACTOR`].
//!
//! Geocoders available here are [`NominatimGeocoder`] for production and
//! [`StaticGeocoder`], a fixed lookup table for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;

use crate::{
    error::{Result, TripError},
    models::{Coordinates, ResolvedRoute},
};

pub mod geo;
pub mod nominatim;

pub use nominatim::{DEFAULT_NOMINATIM_URL, NominatimGeocoder};

/// Average speed used to turn route distance into duration, in mph
pub const ROUTE_AVERAGE_SPEED: f64 = 60.0;

/// Resolves the trip from the driver's current location through pickup to
/// dropoff.
#[async_trait]
pub trait RouteResolver: Send + Sync {
    /// Distance, duration and waypoints of `from → via → to`
    async fn resolve_route(&self, from: &str, via: &str, to: &str) -> Result<ResolvedRoute>;

    /// Resolver name for logging
    fn name(&self) -> &'static str;
}

/// Geocoder trait - abstraction for all geocoding implementations
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocode an address to coordinates.
    /// Returns None if the address cannot be found.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>>;

    /// Get the name of this geocoder implementation
    fn name(&self) -> &'static str;
}

/// Route with a known distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoute {
    distance: f64,
}

impl FixedRoute {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }
}

#[async_trait]
impl RouteResolver for FixedRoute {
    async fn resolve_route(&self, _from: &str, _via: &str, _to: &str) -> Result<ResolvedRoute> {
        Ok(ResolvedRoute {
            distance: self.distance,
            duration: self.distance / ROUTE_AVERAGE_SPEED,
            coordinates: Vec::new(),
        })
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Estimates a route from geocoded waypoints.
#[derive(Debug, Clone)]
pub struct GeocodingRouteResolver<G> {
    geocoder: G,
    road_factor: f64,
}

impl<G: Geocoder> GeocodingRouteResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            road_factor: geo::ROAD_FACTOR,
        }
    }

    /// Overrides the straight-line to road distance coefficient.
    pub fn with_road_factor(mut self, road_factor: f64) -> Self {
        self.road_factor = road_factor;
        self
    }

    async fn locate(&self, address: &str) -> Result<Coordinates> {
        self.geocoder
            .geocode(address)
            .await?
            .ok_or_else(|| TripError::route(format!("Could not geocode '{address}'")))
    }
}

#[async_trait]
impl<G: Geocoder> RouteResolver for GeocodingRouteResolver<G> {
    async fn resolve_route(&self, from: &str, via: &str, to: &str) -> Result<ResolvedRoute> {
        let mut coordinates = Vec::with_capacity(3);
        for address in [from, via, to] {
            coordinates.push(self.locate(address).await?);
        }

        let distance = geo::road_distance(&coordinates, self.road_factor);
        debug!(
            "Resolved {from} → {via} → {to} to {distance:.1} miles using {}",
            self.geocoder.name()
        );

        Ok(ResolvedRoute {
            distance,
            duration: distance / ROUTE_AVERAGE_SPEED,
            coordinates,
        })
    }

    fn name(&self) -> &'static str {
        "geocoding"
    }
}

/// Geocoder answering from a fixed table of place names.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, Coordinates>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a place; lookups are case-insensitive.
    pub fn with_place(mut self, name: &str, coordinates: Coordinates) -> Self {
        self.places.insert(name.to_lowercase(), coordinates);
        self
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        Ok(self.places.get(&address.to_lowercase()).copied())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoder() -> StaticGeocoder {
        StaticGeocoder::new()
            .with_place("St. Louis, MO", Coordinates::new(38.6270, -90.1994))
            .with_place("Chicago, IL", Coordinates::new(41.8781, -87.6298))
            .with_place("Dallas, TX", Coordinates::new(32.7767, -96.7970))
    }

    #[tokio::test]
    async fn test_fixed_route() {
        let route = FixedRoute::new(300.0)
            .resolve_route("a", "b", "c")
            .await
            .unwrap();

        assert_eq!(route.distance, 300.0);
        assert_eq!(route.duration, 5.0);
        assert!(route.coordinates.is_empty());
    }

    #[tokio::test]
    async fn test_geocoding_route_sums_both_legs() {
        let resolver = GeocodingRouteResolver::new(geocoder());
        let route = resolver
            .resolve_route("St. Louis, MO", "Chicago, IL", "Dallas, TX")
            .await
            .unwrap();

        assert!((route.distance - 1387.1).abs() < 0.5, "got {}", route.distance);
        assert!((route.duration - route.distance / 60.0).abs() < 1e-9);
        assert_eq!(route.coordinates.len(), 3);
        assert_eq!(route.coordinates[1], Coordinates::new(41.8781, -87.6298));
    }

    #[tokio::test]
    async fn test_static_geocoder_is_case_insensitive() {
        let coords = geocoder().geocode("chicago, il").await.unwrap();
        assert!(coords.is_some());
    }

    #[tokio::test]
    async fn test_unknown_address_fails_resolution() {
        let resolver = GeocodingRouteResolver::new(geocoder());
        let err = resolver
            .resolve_route("Chicago, IL", "Atlantis", "Dallas, TX")
            .await
            .unwrap_err();

        assert!(matches!(err, TripError::RouteResolution { .. }));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_custom_road_factor() {
        let resolver = GeocodingRouteResolver::new(geocoder()).with_road_factor(1.0);
        let route = resolver
            .resolve_route("Chicago, IL", "Chicago, IL", "Dallas, TX")
            .await
            .unwrap();

        assert!((route.distance - 804.7).abs() < 0.5, "got {}", route.distance);
    }
}
