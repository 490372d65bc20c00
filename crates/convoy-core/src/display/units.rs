//! Unit display utilities.

use std::fmt;

/// Miles with one decimal, e.g. `480.0 mi`.
pub struct Miles(pub f64);

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mi", self.0)
    }
}

/// Hours with one decimal, e.g. `0.5 h`.
pub struct Hours(pub f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} h", self.0)
    }
}
