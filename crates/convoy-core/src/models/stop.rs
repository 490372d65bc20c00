//! Stop model definition and related functionality.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of itinerary stop kinds.
///
/// The serialized names double as the human readable labels that end up in
/// ELD log remarks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Loading at the pickup location
    #[serde(rename = "Pickup")]
    Pickup,

    /// Unloading at the dropoff location
    #[serde(rename = "Dropoff")]
    Dropoff,

    /// Refuelling after a fuel interval
    #[serde(rename = "Fuel Stop")]
    FuelStop,

    /// Short break after continuous driving
    #[serde(rename = "30-min Break")]
    Break,

    /// Mandatory off-duty rest
    #[serde(rename = "10-hour Rest")]
    Rest,
}

impl StopKind {
    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopKind::Pickup => "Pickup",
            StopKind::Dropoff => "Dropoff",
            StopKind::FuelStop => "Fuel Stop",
            StopKind::Break => "30-min Break",
            StopKind::Rest => "10-hour Rest",
        }
    }
}

/// A single event on the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    /// What happens at this stop
    #[serde(rename = "type")]
    pub kind: StopKind,

    /// Named location; only pickup and dropoff carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Time spent at the stop in hours
    pub duration: f64,

    /// Miles driven from pickup when the stop begins
    pub distance_from_start: f64,
}

impl Stop {
    /// Creates an en-route stop without a named location.
    pub fn en_route(kind: StopKind, duration: f64, distance_from_start: f64) -> Self {
        Self {
            kind,
            location: None,
            duration,
            distance_from_start,
        }
    }

    /// Creates a stop at a named location.
    pub fn at(
        kind: StopKind,
        location: impl Into<String>,
        duration: f64,
        distance_from_start: f64,
    ) -> Self {
        Self {
            kind,
            location: Some(location.into()),
            duration,
            distance_from_start,
        }
    }
}
