//! Parameter structures for Convoy operations
//!
//! This module contains shared parameter structures used across interfaces
//! (CLI, MCP) without framework-specific derives. Interface layers wrap or
//! convert into these types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is only compiled in with the `schema` feature,
//! which the MCP server enables.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for planning a trip over a known distance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanTrip {
    /// Route distance from pickup to dropoff, in miles
    pub total_distance: f64,
    /// Hours already used in the current cycle
    #[serde(default)]
    pub current_cycle_used: f64,
    /// Pickup location name
    pub pickup_location: String,
    /// Dropoff location name
    pub dropoff_location: String,
}

/// Parameters for planning a trip between addresses.
///
/// The route runs from the driver's current location through the pickup to
/// the dropoff; its distance is resolved before planning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RouteTrip {
    /// Where the driver is now
    pub current_location: String,
    /// Pickup address
    pub pickup_location: String,
    /// Dropoff address
    pub dropoff_location: String,
    /// Hours already used in the current cycle
    #[serde(default)]
    pub current_cycle_used: f64,
}
