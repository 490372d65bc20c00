//! Display implementations for domain models.
//!
//! Every implementation renders markdown so the CLI renderer and MCP tool
//! results share a single format.

use std::fmt;

use super::{
    collections::{LogEntries, Stops},
    units::{Hours, Miles},
};
use crate::models::{DutyStatus, LogEntry, RoutedTrip, Stop, StopKind, Trip};

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        write!(
            f,
            " ({}, {})",
            Miles(self.distance_from_start),
            Hours(self.duration)
        )
    }
}

impl fmt::Display for LogEntry {
    /// Renders the entry as a single markdown table row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} | {} | {:.1} | {} |",
            self.date,
            self.time.strftime("%H:%M"),
            self.status,
            self.location,
            self.hours_driven,
            self.remarks
        )
    }
}

/// Writes the `# Trip: A → B` header from the named stops.
fn fmt_header(f: &mut fmt::Formatter<'_>, stops: &[Stop]) -> fmt::Result {
    let named = |kind: StopKind| {
        stops
            .iter()
            .find(|stop| stop.kind == kind)
            .and_then(|stop| stop.location.as_deref())
            .unwrap_or("?")
    };
    writeln!(
        f,
        "# Trip: {} → {}",
        named(StopKind::Pickup),
        named(StopKind::Dropoff)
    )?;
    writeln!(f)
}

fn fmt_stop_counts(f: &mut fmt::Formatter<'_>, stops: &[Stop]) -> fmt::Result {
    let count = |kind: StopKind| stops.iter().filter(|stop| stop.kind == kind).count();
    writeln!(
        f,
        "- Stops: {} fuel, {} breaks, {} rests",
        count(StopKind::FuelStop),
        count(StopKind::Break),
        count(StopKind::Rest)
    )
}

fn fmt_sections(
    f: &mut fmt::Formatter<'_>,
    stops: &[Stop],
    logs: &[LogEntry],
) -> fmt::Result {
    writeln!(f, "\n## Stops")?;
    writeln!(f)?;
    write!(f, "{}", Stops(stops))?;
    writeln!(f, "\n## ELD Log")?;
    writeln!(f)?;
    write!(f, "{}", LogEntries(logs))
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_header(f, &self.stops)?;

        writeln!(f, "- Distance: {}", Miles(self.total_distance()))?;
        writeln!(f, "- Driving: {}", Hours(self.driving_hours))?;
        writeln!(f, "- Elapsed: {}", Hours(self.elapsed_hours()))?;
        fmt_stop_counts(f, &self.stops)?;

        fmt_sections(f, &self.stops, &self.logs)
    }
}

impl fmt::Display for RoutedTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_header(f, &self.stops)?;

        writeln!(f, "- Route distance: {:.2} mi", self.total_distance)?;
        writeln!(f, "- Route duration: {:.2} h", self.total_duration)?;
        if !self.route.coordinates.is_empty() {
            writeln!(f, "- Waypoints: {}", self.route.coordinates.len())?;
        }
        fmt_stop_counts(f, &self.stops)?;

        fmt_sections(f, &self.stops, &self.eld_logs)
    }
}
