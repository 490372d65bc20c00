//! Geographic calculations

use crate::models::Coordinates;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Road distance coefficient (straight line to road)
pub const ROAD_FACTOR: f64 = 1.3;

/// Calculate Haversine distance between two points in miles
pub fn haversine_miles(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Estimate road distance along consecutive waypoints
pub fn road_distance(waypoints: &[Coordinates], road_factor: f64) -> f64 {
    waypoints
        .windows(2)
        .map(|leg| haversine_miles(&leg[0], &leg[1]))
        .sum::<f64>()
        * road_factor
}
