//! Data models for stops, log entries, and trips.
//!
//! This module contains the domain models produced by the stop planner and
//! the log generator. Display implementations for these models live in
//! [`crate::display::models`] so presentation stays separate from data.
//!
//! # Wire Format
//!
//! The serde representation matches the JSON returned by the trip service:
//!
//! - [`Stop`] serializes its kind under `"type"` using the display names
//!   (`"Fuel Stop"`, `"30-min Break"`, `"10-hour Rest"`, ...) and omits
//!   `location` for en-route stops.
//! - [`LogEntry`] serializes `date` as `YYYY-MM-DD`, `time` as `HH:MM` and
//!   `status` as the grid code (`OFF`, `SB`, `ON`, `D`).
//! - [`ResolvedRoute`] serializes `coordinates` as `[lat, lon]` pairs.
//!
//! # Examples
//!
//! ```rust
//! use convoy_core::models::{DutyStatus, Stop, StopKind};
//!
//! let rest = Stop::en_route(StopKind::Rest, 10.0, 660.0);
//! assert_eq!(DutyStatus::from(rest.kind), DutyStatus::OffDuty);
//!
//! let json = serde_json::to_string(&rest).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"type":"10-hour Rest","duration":10.0,"distance_from_start":660.0}"#
//! );
//! ```

pub mod log_entry;
pub mod route;
pub mod stop;
pub mod trip;


pub use log_entry::{DutyStatus, EN_ROUTE, LogEntry};
pub use route::{Coordinates, ResolvedRoute};
pub use stop::{Stop, StopKind};
pub use trip::{RoutedTrip, Trip, round_to};
