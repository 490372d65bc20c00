//! Error types for the trip planning library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all trip planning operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Geocoding or routing provider failures
    #[error("Could not calculate route: {message}")]
    RouteResolution { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Calendar arithmetic errors while advancing the log clock
    #[error("Time error: {source}")]
    Time {
        #[from]
        source: jiff::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a route resolution error from a message.
    pub fn route(message: impl Into<String>) -> Self {
        Self::RouteResolution {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the caller's input rather than by
    /// the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Extension trait for Result to map foreign errors onto [`TripError`] with
/// a short context message.
pub trait ResultExt<T> {
    /// Map any error to a route resolution failure.
    fn route_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Map any error to a configuration failure.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn route_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TripError::RouteResolution {
            message: format!("{context}: {e}"),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TripError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for trip planning operations
pub type Result<T> = std::result::Result<T, TripError>;
