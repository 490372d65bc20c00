//! Wall-clock sources for log generation.

use std::fmt;

use jiff::Zoned;

/// Source of the instant a generated log starts at.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time in the zone the log should be written in.
    fn now(&self) -> Zoned;
}

/// Reads the system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedClock(Zoned);

impl FixedClock {
    pub fn new(start: Zoned) -> Self {
        Self(start)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}
