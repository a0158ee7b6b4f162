//! Error types for the leave decision pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failures that end a request. Notification failures are not
//! represented here: they are recovered by the dispatcher and reported as
//! delivery flags instead.

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the leave decision pipeline.
///
/// # Example
///
/// ```
/// use leave_desk::error::PipelineError;
///
/// let error = PipelineError::InvalidDate {
///     value: "13/01/2024".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date format. Use YYYY-MM-DD.");
/// ```
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The join date was not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A request field was blank or malformed.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The wire name of the offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The store could not persist or read records.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable combination of values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },
}

impl PipelineError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PipelineError::InvalidDate { .. } | PipelineError::InvalidField { .. }
        )
    }
}

/// A type alias for Results that return PipelineError.
pub type PipelineResult<T> = Result<T, PipelineError>;
