//! Collection wrapper types for displaying stop lists and logs as tables.

use std::fmt;

use super::units::{Hours, Miles};
use crate::models::{LogEntry, Stop};

/// Newtype wrapper for displaying a stop sequence as a markdown table.
///
/// # Examples
///
/// ```rust
/// use convoy_core::{
///     display::Stops,
///     models::{Stop, StopKind},
/// };
///
/// let stops = vec![
///     Stop::at(StopKind::Pickup, "Chicago, IL", 1.0, 0.0),
///     Stop::en_route(StopKind::Break, 0.5, 480.0),
/// ];
/// let output = Stops(&stops).to_string();
/// assert!(output.contains("| 2 | 30-min Break | En Route | 480.0 mi | 0.5 h |"));
/// ```
pub struct Stops<'a>(pub &'a [Stop]);

impl fmt::Display for Stops<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No stops planned.");
        }

        writeln!(f, "| # | Stop | Location | Mile | Duration |")?;
        writeln!(f, "|---|------|----------|------|----------|")?;
        for (index, stop) in self.0.iter().enumerate() {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                index + 1,
                stop.kind,
                stop.location.as_deref().unwrap_or(crate::models::EN_ROUTE),
                Miles(stop.distance_from_start),
                Hours(stop.duration)
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying log entries as a markdown table.
pub struct LogEntries<'a>(pub &'a [LogEntry]);

impl fmt::Display for LogEntries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No log entries.");
        }

        writeln!(f, "| Date | Time | Status | Location | Hours | Remarks |")?;
        writeln!(f, "|------|------|--------|----------|-------|---------|")?;
        for entry in self.0 {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;
    use crate::models::{DutyStatus, StopKind};

    #[test]
    fn test_empty_collections() {
        assert_eq!(Stops(&[]).to_string(), "No stops planned.\n");
        assert_eq!(LogEntries(&[]).to_string(), "No log entries.\n");
    }

    #[test]
    fn test_log_table_rows() {
        let entries = vec![LogEntry {
            date: date(2025, 3, 3),
            time: time(9, 30, 0, 0),
            status: DutyStatus::OffDuty,
            location: "En Route".to_string(),
            hours_driven: 8.5,
            remarks: StopKind::Rest.as_str().to_string(),
        }];
        let output = LogEntries(&entries).to_string();

        assert!(output.starts_with("| Date | Time | Status |"));
        assert!(output.contains("| 2025-03-03 | 09:30 | OFF | En Route | 8.5 | 10-hour Rest |"));
    }
}
