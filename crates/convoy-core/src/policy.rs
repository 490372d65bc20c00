//! Hours-of-Service policy parameters.
//!
//! The planner never reads process-wide constants; every threshold it checks
//! comes from an [`HosPolicy`] value handed to it. The defaults reproduce the
//! simplified property-carrying rule set:
//!
//! | Parameter              | Default | Enforced |
//! |------------------------|---------|----------|
//! | `max_driving_hours`    | 11 h    | yes      |
//! | `max_duty_hours`       | 14 h    | no       |
//! | `required_break_after` | 8 h     | yes      |
//! | `break_duration`       | 0.5 h   | yes      |
//! | `off_duty_required`    | 10 h    | yes      |
//! | `max_cycle_hours`      | 70 h    | no       |
//! | `fuel_interval`        | 1000 mi | yes      |
//! | `average_speed`        | 60 mph  | yes      |
//! | `segment_cap`          | 2 h     | yes      |
//!
//! A policy can be loaded from JSON. Missing fields fall back to the
//! defaults, so a file containing only `{"fuel_interval": 800}` is valid.

use std::{fmt, path::Path};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// Thresholds and durations that drive stop insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct HosPolicy {
    /// Cycle hours after which a rest must be taken before driving on
    pub max_driving_hours: f64,
    /// On-duty window length. Carried for reference, not enforced
    pub max_duty_hours: f64,
    /// Driving hours since the last break or rest before a break is due
    pub required_break_after: f64,
    /// Length of a break in hours
    pub break_duration: f64,
    /// Length of a rest in hours
    pub off_duty_required: f64,
    /// Multi-day cycle cap. Carried for reference, not enforced
    pub max_cycle_hours: f64,
    /// Miles between fuel stops
    pub fuel_interval: f64,
    /// Length of a fuel stop in hours
    pub fuel_duration: f64,
    /// Assumed average speed in miles per hour
    pub average_speed: f64,
    /// Longest simulated drive segment in hours
    pub segment_cap: f64,
    /// Time spent loading at pickup, in hours
    pub pickup_duration: f64,
    /// Time spent unloading at dropoff, in hours
    pub dropoff_duration: f64,
}

impl Default for HosPolicy {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_duty_hours: 14.0,
            required_break_after: 8.0,
            break_duration: 0.5,
            off_duty_required: 10.0,
            max_cycle_hours: 70.0,
            fuel_interval: 1000.0,
            fuel_duration: 0.5,
            average_speed: 60.0,
            segment_cap: 2.0,
            pickup_duration: 1.0,
            dropoff_duration: 1.0,
        }
    }
}

impl HosPolicy {
    /// Reads a policy from a JSON file and validates it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TripError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let policy: Self = serde_json::from_str(&raw)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Writes the policy as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TripError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Checks that every parameter is finite and in range.
    ///
    /// Speed and segment cap must be strictly positive, otherwise the drive
    /// loop could not make progress. Everything else must be non-negative.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("average_speed", self.average_speed),
            ("segment_cap", self.segment_cap),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TripError::invalid_input(field)
                    .with_reason(format!("must be a positive number, got {value}")));
            }
        }

        let non_negative = [
            ("max_driving_hours", self.max_driving_hours),
            ("max_duty_hours", self.max_duty_hours),
            ("required_break_after", self.required_break_after),
            ("break_duration", self.break_duration),
            ("off_duty_required", self.off_duty_required),
            ("max_cycle_hours", self.max_cycle_hours),
            ("fuel_interval", self.fuel_interval),
            ("fuel_duration", self.fuel_duration),
            ("pickup_duration", self.pickup_duration),
            ("dropoff_duration", self.dropoff_duration),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TripError::invalid_input(field)
                    .with_reason(format!("must be a non-negative number, got {value}")));
            }
        }

        Ok(())
    }

    /// Miles covered by one full-length drive segment.
    pub fn segment_miles(&self) -> f64 {
        self.segment_cap * self.average_speed
    }
}

impl fmt::Display for HosPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Hours-of-Service Policy")?;
        writeln!(f)?;
        writeln!(f, "- **Rest after**: {} cycle hours", self.max_driving_hours)?;
        writeln!(f, "- **Rest length**: {} h", self.off_duty_required)?;
        writeln!(f, "- **Break after**: {} driving hours", self.required_break_after)?;
        writeln!(f, "- **Break length**: {} h", self.break_duration)?;
        writeln!(f, "- **Fuel every**: {} mi", self.fuel_interval)?;
        writeln!(f, "- **Fuel stop length**: {} h", self.fuel_duration)?;
        writeln!(f, "- **Average speed**: {} mph", self.average_speed)?;
        writeln!(f, "- **Longest segment**: {} h", self.segment_cap)?;
        writeln!(
            f,
            "- **Pickup / dropoff**: {} h / {} h",
            self.pickup_duration, self.dropoff_duration
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Duty window ({} h) and cycle cap ({} h) are recorded but not enforced.",
            self.max_duty_hours, self.max_cycle_hours
        )
    }
}
