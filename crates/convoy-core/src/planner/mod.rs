//! High-level planner API combining stop planning and log generation.
//!
//! [`TripPlanner`] owns the [`HosPolicy`] and the [`Clock`] a trip is planned
//! with, so callers only pass trip parameters. It is cheap to clone and holds
//! no mutable state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    PlanTrip     │    │  Stop Planner   │    │  Log Generator  │
//! │ (distance,      │───▶│  (hos)          │───▶│  (eld)          │───▶ Trip
//! │  cycle hours)   │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use convoy_core::{TripPlannerBuilder, models::StopKind, params::PlanTrip};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new().with_user_config(false).build()?;
//!
//! let trip = planner.plan_trip(&PlanTrip {
//!     total_distance: 1500.0,
//!     current_cycle_used: 0.0,
//!     pickup_location: "Chicago, IL".to_string(),
//!     dropoff_location: "Dallas, TX".to_string(),
//! })?;
//!
//! assert_eq!(trip.stops.len(), trip.logs.len());
//! assert!(trip.count(StopKind::FuelStop) >= 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::info;

use crate::{
    eld::{self, Clock},
    error::Result,
    hos,
    models::{Stop, Trip},
    params::PlanTrip,
    policy::HosPolicy,
};

pub mod builder;


pub use builder::{TripPlannerBuilder, user_policy_path};

/// Main planner interface for trips.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    policy: HosPolicy,
    clock: Arc<dyn Clock>,
}

impl TripPlanner {
    /// Creates a planner from an already validated policy.
    pub(crate) fn new(policy: HosPolicy, clock: Arc<dyn Clock>) -> Self {
        Self { policy, clock }
    }

    /// The policy every trip is planned with.
    pub fn policy(&self) -> &HosPolicy {
        &self.policy
    }

    /// Plans the stops of a trip without generating a log.
    pub fn plan_stops(&self, params: &PlanTrip) -> Result<Vec<Stop>> {
        hos::plan_stops(
            &self.policy,
            params.total_distance,
            params.current_cycle_used,
            &params.pickup_location,
            &params.dropoff_location,
        )
    }

    /// Plans the stops of a trip and generates its ELD log, starting the log
    /// at the planner clock's current time.
    pub fn plan_trip(&self, params: &PlanTrip) -> Result<Trip> {
        let itinerary = hos::plan_itinerary(
            &self.policy,
            params.total_distance,
            params.current_cycle_used,
            &params.pickup_location,
            &params.dropoff_location,
        )?;
        let logs = eld::generate_logs(
            &itinerary.stops,
            params.current_cycle_used,
            &self.clock.now(),
        )?;

        info!(
            "Planned {} → {}: {:.1} miles, {} stops",
            params.pickup_location,
            params.dropoff_location,
            params.total_distance,
            itinerary.stops.len()
        );

        Ok(Trip {
            stops: itinerary.stops,
            logs,
            driving_hours: itinerary.driving_hours,
        })
    }
}
