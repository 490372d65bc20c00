//! Display formatting for trips, stops and logs.
//!
//! Domain models implement [`std::fmt::Display`] directly and render
//! markdown. Slices are wrapped in borrowed newtypes so they can be printed
//! as tables without allocating.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Table Wrappers  │    │   Formatted     │
//! │  (Trip, Stop)   │───▶│ & Unit Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Table wrappers ([`Stops`], [`LogEntries`])
//! - [`units`]: Mile and hour formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use convoy_core::{TripPlannerBuilder, params::PlanTrip};
//!
//! let planner = TripPlannerBuilder::new().with_user_config(false).build()?;
//! let trip = planner.plan_trip(&PlanTrip {
//!     total_distance: 1500.0,
//!     pickup_location: "Chicago, IL".to_string(),
//!     dropoff_location: "Denver, CO".to_string(),
//!     ..PlanTrip::default()
//! })?;
//!
//! let output = trip.to_string();
//! assert!(output.starts_with("# Trip: Chicago, IL → Denver, CO"));
//! assert!(output.contains("| 10-hour Rest |"));
//! # Ok::<(), convoy_core::TripError>(())
//! ```

pub mod collections;
pub mod models;
pub mod units;

pub use collections::{LogEntries, Stops};
pub use units::{Hours, Miles};
