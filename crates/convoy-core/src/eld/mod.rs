//! ELD log generation from a planned stop sequence.
//!
//! The generator keeps a running clock, starting at the instant supplied by a
//! [`Clock`], and a running hours counter, starting at the cycle hours already
//! used. Each stop produces one [`LogEntry`] stamped with the current clock;
//! the clock then advances by the stop's duration. Every stop except a rest
//! adds its duration to the hours counter.
//!
//! Only stops are logged. Drive segments between stops do not advance the
//! clock and never produce a [`DutyStatus::Driving`] entry.

use jiff::{SignedDuration, Zoned};

use crate::{
    error::Result,
    hos::ensure_non_negative,
    models::{DutyStatus, EN_ROUTE, LogEntry, Stop, StopKind, round_to},
};

pub mod clock;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};

/// Generates one log entry per stop, in stop order.
///
/// # Errors
///
/// Returns [`crate::TripError::InvalidInput`] for negative or non-finite
/// cycle hours and [`crate::TripError::Time`] if advancing the clock leaves
/// the supported calendar range.
pub fn generate_logs(
    stops: &[Stop],
    initial_cycle_hours: f64,
    start: &Zoned,
) -> Result<Vec<LogEntry>> {
    ensure_non_negative("initial_cycle_hours", initial_cycle_hours)?;

    let mut clock = start.clone();
    let mut hours_driven = initial_cycle_hours;
    let mut logs = Vec::with_capacity(stops.len());

    for stop in stops {
        logs.push(LogEntry {
            date: clock.date(),
            time: clock.time(),
            status: status_for(stop.kind),
            location: stop
                .location
                .clone()
                .unwrap_or_else(|| EN_ROUTE.to_string()),
            hours_driven: round_to(hours_driven, 1),
            remarks: stop.kind.as_str().to_string(),
        });

        clock = advance(&clock, stop.duration)?;
        if stop.kind != StopKind::Rest {
            hours_driven += stop.duration;
        }
    }

    Ok(logs)
}

/// Status recorded for a stop of the given kind.
pub fn status_for(kind: StopKind) -> DutyStatus {
    DutyStatus::from(kind)
}

fn advance(clock: &Zoned, hours: f64) -> Result<Zoned> {
    let step = SignedDuration::try_from_secs_f64(hours * 3600.0)?;
    Ok(clock.checked_add(step)?)
}
