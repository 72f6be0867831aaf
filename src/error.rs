//! Error types for the workout journal.
//!
//! All failures in this crate funnel into [`JournalError`]. The taxonomy is
//! small and none of it is fatal: validation failures keep the pending form
//! input alive, storage failures never roll back in-memory state, and a
//! missing location only disables map-derived features for the session.
//!
//! ## Error Categories
//!
//! - **Validation**: a submitted numeric field is non-finite or out of range
//! - **Storage**: the durable slot could not be read or written
//! - **Parse**: the durable slot holds data that cannot be rehydrated
//! - **LocationUnavailable**: geolocation failed at session start
//! - **NoPendingLocation**: a form submit arrived with no picked location
//!
//! ## Helper Constructors
//!
//! ```rust
//! use traillog::JournalError;
//!
//! let error = JournalError::validation("distance", "a positive, finite number", -1.0);
//! assert!(error.is_input_error());
//!
//! let error = JournalError::parse("stored workouts", "duplicate workout id");
//! assert!(!error.is_input_error());
//! ```

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T, E = JournalError> = std::result::Result<T, E>;

/// Main error type for journal operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JournalError {
    #[error("invalid {field}: expected {requirement}, got {value}")]
    Validation { field: &'static str, requirement: &'static str, value: f64 },

    #[error("storage slot error: {context}")]
    Storage {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("current location is unavailable")]
    LocationUnavailable,

    #[error("no location has been picked for this workout")]
    NoPendingLocation,
}

impl JournalError {
    /// Returns whether this error came from user-supplied form input.
    ///
    /// Input errors keep the form open with its values retained; everything
    /// else is an environmental failure the host should surface as a warning.
    pub fn is_input_error(&self) -> bool {
        match self {
            JournalError::Validation { .. } => true,
            JournalError::NoPendingLocation => true,
            JournalError::Storage { .. } => false,
            JournalError::Parse { .. } => false,
            JournalError::LocationUnavailable => false,
        }
    }

    /// Helper constructor for validation errors.
    pub fn validation(field: &'static str, requirement: &'static str, value: f64) -> Self {
        JournalError::Validation { field, requirement, value }
    }

    /// Helper constructor for storage errors without an underlying cause.
    pub fn storage(context: impl Into<String>) -> Self {
        JournalError::Storage { context: context.into(), source: None }
    }

    /// Helper constructor for storage errors with an underlying cause.
    pub fn storage_with_source(
        context: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        JournalError::Storage { context: context.into(), source: Some(source) }
    }

    /// Helper constructor for parse errors.
    pub fn parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        JournalError::Parse { context: context.into(), details: details.into() }
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage { context: "io".to_string(), source: Some(Box::new(err)) }
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Parse { context: "stored workouts".to_string(), details: err.to_string() }
    }
}
