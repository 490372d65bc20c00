//! ELD log entry model and duty statuses.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::StopKind;

/// Location recorded for stops that have no named place.
pub const EN_ROUTE: &str = "En Route";

/// Type-safe enumeration of ELD duty statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    /// Off duty
    #[serde(rename = "OFF")]
    OffDuty,

    /// Sleeper berth
    #[serde(rename = "SB")]
    SleeperBerth,

    /// On duty, not driving
    #[serde(rename = "ON")]
    OnDuty,

    /// Driving. No stop kind maps here: drive segments between stops are not
    /// logged as entries of their own.
    #[serde(rename = "D")]
    Driving,
}

impl DutyStatus {
    /// Log grid code for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::OnDuty => "ON",
            DutyStatus::Driving => "D",
        }
    }
}

impl From<StopKind> for DutyStatus {
    fn from(kind: StopKind) -> Self {
        match kind {
            StopKind::Rest => DutyStatus::OffDuty,
            StopKind::Break => DutyStatus::SleeperBerth,
            StopKind::Pickup | StopKind::Dropoff => DutyStatus::OnDuty,
            StopKind::FuelStop => DutyStatus::OnDuty,
        }
    }
}

/// One row of the generated ELD log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Calendar date of the status change
    pub date: Date,

    /// Clock time of the status change, serialized as `HH:MM`
    #[serde(with = "hhmm")]
    pub time: Time,

    /// Duty status entered at this time
    pub status: DutyStatus,

    /// Stop location, or [`EN_ROUTE`]
    pub location: String,

    /// Cumulative hours counter, rounded to one decimal
    pub hours_driven: f64,

    /// Stop description
    pub remarks: String,
}

mod hhmm {
    use jiff::civil::Time;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.strftime(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Time::strptime(FORMAT, &raw).map_err(D::Error::custom)
    }
}
