//! Core library for the Convoy trip planner.
//!
//! Given a trip distance and the hours already used in the current duty
//! cycle, the crate plans every stop a property-carrying driver must make
//! under the Hours-of-Service rules and generates the matching ELD log.
//!
//! # Layers
//!
//! - [`hos`]: the stop planner, a pure function of distance and policy
//! - [`eld`]: turns stops into timestamped log entries
//! - [`planner`]: [`TripPlanner`] combines both behind a configured policy
//! - [`route`] and [`service`]: resolve addresses to a route distance before
//!   planning
//! - [`display`]: markdown rendering shared by the CLI and the MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use convoy_core::{TripPlannerBuilder, models::StopKind, params::PlanTrip};
//!
//! let planner = TripPlannerBuilder::new().with_user_config(false).build()?;
//!
//! let trip = planner.plan_trip(&PlanTrip {
//!     total_distance: 1500.0,
//!     current_cycle_used: 0.0,
//!     pickup_location: "Chicago, IL".to_string(),
//!     dropoff_location: "Denver, CO".to_string(),
//! })?;
//!
//! assert_eq!(trip.count(StopKind::Rest), 2);
//! assert_eq!(trip.count(StopKind::FuelStop), 1);
//! println!("{trip}");
//! # Ok::<(), convoy_core::TripError>(())
//! ```

pub mod display;
pub mod eld;
pub mod error;
pub mod hos;
pub mod models;
pub mod params;
pub mod planner;
pub mod policy;
pub mod route;
pub mod service;

// Re-export commonly used types
pub use display::{LogEntries, Stops};
pub use error::{Result, ResultExt, TripError};
pub use models::{DutyStatus, LogEntry, ResolvedRoute, RoutedTrip, Stop, StopKind, Trip};
pub use params::{PlanTrip, RouteTrip};
pub use planner::{TripPlanner, TripPlannerBuilder, user_policy_path};
pub use policy::HosPolicy;
pub use service::TripService;
