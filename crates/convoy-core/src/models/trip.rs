//! Trip results returned by the planner and the trip service.

use serde::{Deserialize, Serialize};

use super::{LogEntry, ResolvedRoute, Stop, StopKind};

/// Planned stops and generated log for a single trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Stops in chronological order, pickup first and dropoff last
    pub stops: Vec<Stop>,

    /// One log entry per stop, same order
    #[serde(rename = "eld_logs")]
    pub logs: Vec<LogEntry>,

    /// Total simulated driving time in hours
    pub driving_hours: f64,
}

impl Trip {
    /// Number of stops of the given kind.
    pub fn count(&self, kind: StopKind) -> usize {
        self.stops.iter().filter(|stop| stop.kind == kind).count()
    }

    /// Distance of the dropoff stop, which is the trip length.
    pub fn total_distance(&self) -> f64 {
        self.stops
            .last()
            .map(|stop| stop.distance_from_start)
            .unwrap_or_default()
    }

    /// Driving time plus every stop duration.
    pub fn elapsed_hours(&self) -> f64 {
        self.driving_hours + self.stops.iter().map(|stop| stop.duration).sum::<f64>()
    }
}

/// A trip planned over a route resolved from addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutedTrip {
    /// Route as reported by the resolver
    pub route: ResolvedRoute,

    /// Stops in chronological order
    pub stops: Vec<Stop>,

    /// One log entry per stop
    pub eld_logs: Vec<LogEntry>,

    /// Route distance in miles, rounded to two decimals
    pub total_distance: f64,

    /// Route duration in hours, rounded to two decimals
    pub total_duration: f64,
}

impl RoutedTrip {
    /// Combines a resolved route with the trip planned over it.
    pub fn new(route: ResolvedRoute, trip: Trip) -> Self {
        let total_distance = round_to(route.distance, 2);
        let total_duration = round_to(route.duration, 2);
        Self {
            route,
            stops: trip.stops,
            eld_logs: trip.logs,
            total_distance,
            total_duration,
        }
    }
}

/// Rounds to the given number of decimals.
///
/// Rounding goes through the correctly rounded decimal formatter, so the
/// exact binary value decides and exact ties go to even: `0.25` becomes
/// `0.2` and `0.35` (stored just below) becomes `0.3`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
