//! Hours-of-Service stop planning.
//!
//! The planner walks the trip in drive segments of at most
//! [`HosPolicy::segment_cap`] hours. Before every segment it checks, in this
//! order, whether a fuel stop, a break, or a rest is due, and inserts each one
//! that is. Several stops can be inserted at the same mile.
//!
//! ```text
//!            ┌──────────────┐
//!  Pickup ──▶│ fuel due?    │──▶ FuelStop
//!            │ break due?   │──▶ Break
//!            │ rest due?    │──▶ Rest
//!            │ drive ≤ cap  │
//!            └──────┬───────┘
//!                   │ repeat while miles remain
//!                   ▼
//!                Dropoff
//! ```
//!
//! Two counters are kept apart: cycle hours, which only a rest resets, and
//! hours since the last break, which both breaks and rests reset.
//!
//! # Examples
//!
//! ```rust
//! use convoy_core::{HosPolicy, hos::plan_stops, models::StopKind};
//!
//! let stops = plan_stops(&HosPolicy::default(), 500.0, 0.0, "Chicago, IL", "Nashville, TN")?;
//! let kinds: Vec<_> = stops.iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, [StopKind::Pickup, StopKind::Break, StopKind::Dropoff]);
//! # Ok::<(), convoy_core::TripError>(())
//! ```

use log::debug;

use crate::{
    error::{Result, TripError},
    models::{Stop, StopKind},
    policy::HosPolicy,
};

#[cfg(test)]
mod tests;

/// Upper bound on drive segments per trip.
pub const MAX_DRIVE_SEGMENTS: usize = 100_000;

/// Remaining distance at or below this many miles counts as arrived.
const DISTANCE_EPSILON: f64 = 1e-9;

/// Output of a planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Stops in chronological order
    pub stops: Vec<Stop>,
    /// Sum of all simulated drive segments, in hours
    pub driving_hours: f64,
    /// Number of drive segments simulated
    pub segments: usize,
}

/// Running budget while walking the trip.
#[derive(Debug, Clone, Default, PartialEq)]
struct TripBudget {
    remaining_distance: f64,
    current_cycle_hours: f64,
    hours_driven_since_break: f64,
    distance_since_fuel: f64,
}

impl TripBudget {
    fn new(total_distance: f64, initial_cycle_hours: f64) -> Self {
        Self {
            remaining_distance: total_distance,
            current_cycle_hours: initial_cycle_hours,
            ..Self::default()
        }
    }

    fn distance_covered(&self, total_distance: f64) -> f64 {
        (total_distance - self.remaining_distance).clamp(0.0, total_distance)
    }

    /// Drives one segment and returns its length in hours.
    fn drive(&mut self, policy: &HosPolicy) -> f64 {
        let hours = policy
            .segment_cap
            .min(self.remaining_distance / policy.average_speed);
        let miles = hours * policy.average_speed;

        self.remaining_distance -= miles;
        self.current_cycle_hours += hours;
        self.hours_driven_since_break += hours;
        self.distance_since_fuel += miles;

        hours
    }
}

/// Plans the stops of a trip and reports the simulated driving time.
///
/// # Errors
///
/// Returns [`TripError::InvalidInput`] when the distance or cycle hours are
/// negative or non-finite, when the policy fails validation, or when the trip
/// would need more than [`MAX_DRIVE_SEGMENTS`] drive segments.
pub fn plan_itinerary(
    policy: &HosPolicy,
    total_distance: f64,
    initial_cycle_hours: f64,
    pickup_location: &str,
    dropoff_location: &str,
) -> Result<Itinerary> {
    policy.validate()?;
    ensure_non_negative("total_distance", total_distance)?;
    ensure_non_negative("initial_cycle_hours", initial_cycle_hours)?;

    let estimated_segments = (total_distance / policy.segment_miles()).ceil();
    if estimated_segments > MAX_DRIVE_SEGMENTS as f64 {
        return Err(TripError::invalid_input("total_distance").with_reason(format!(
            "{total_distance} miles needs more than {MAX_DRIVE_SEGMENTS} drive segments"
        )));
    }

    let mut stops = vec![Stop::at(
        StopKind::Pickup,
        pickup_location,
        policy.pickup_duration,
        0.0,
    )];
    let mut budget = TripBudget::new(total_distance, initial_cycle_hours);
    let mut driving_hours = 0.0;
    let mut segments = 0;

    while budget.remaining_distance > DISTANCE_EPSILON && segments < MAX_DRIVE_SEGMENTS {
        let here = budget.distance_covered(total_distance);

        if budget.distance_since_fuel >= policy.fuel_interval {
            debug!("Fuel stop at mile {here:.1}");
            stops.push(Stop::en_route(StopKind::FuelStop, policy.fuel_duration, here));
            budget.distance_since_fuel = 0.0;
        }

        if budget.hours_driven_since_break >= policy.required_break_after {
            debug!("Break at mile {here:.1}");
            stops.push(Stop::en_route(StopKind::Break, policy.break_duration, here));
            budget.hours_driven_since_break = 0.0;
        }

        if budget.current_cycle_hours >= policy.max_driving_hours {
            debug!(
                "Rest at mile {here:.1} after {:.1} cycle hours",
                budget.current_cycle_hours
            );
            stops.push(Stop::en_route(StopKind::Rest, policy.off_duty_required, here));
            budget.current_cycle_hours = 0.0;
            budget.hours_driven_since_break = 0.0;
        }

        driving_hours += budget.drive(policy);
        segments += 1;
    }

    if budget.remaining_distance > DISTANCE_EPSILON {
        return Err(TripError::invalid_input("total_distance").with_reason(format!(
            "trip did not finish within {MAX_DRIVE_SEGMENTS} drive segments"
        )));
    }

    stops.push(Stop::at(
        StopKind::Dropoff,
        dropoff_location,
        policy.dropoff_duration,
        total_distance,
    ));

    debug!(
        "Planned {} stops over {total_distance:.1} miles in {segments} segments",
        stops.len()
    );

    Ok(Itinerary {
        stops,
        driving_hours,
        segments,
    })
}

/// Plans the stops of a trip from pickup to dropoff.
///
/// The first stop is always the pickup at mile 0 and the last is always the
/// dropoff at `total_distance`.
pub fn plan_stops(
    policy: &HosPolicy,
    total_distance: f64,
    initial_cycle_hours: f64,
    pickup_location: &str,
    dropoff_location: &str,
) -> Result<Vec<Stop>> {
    plan_itinerary(
        policy,
        total_distance,
        initial_cycle_hours,
        pickup_location,
        dropoff_location,
    )
    .map(|itinerary| itinerary.stops)
}

pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(TripError::invalid_input(field)
            .with_reason(format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(TripError::invalid_input(field)
            .with_reason(format!("must not be negative, got {value}")));
    }
    Ok(())
}
