//! Error types for the shift entitlement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops a shift from being calculated.

use thiserror::Error;

/// The main error type for the shift entitlement engine.
///
/// Every fallible operation returns this error type. A calculation either
/// succeeds completely or fails with one of these variants; there is no
/// partial result.
///
/// # Example
///
/// ```
/// use shift_entitlement::error::EngineError;
///
/// let error = EngineError::MissingInput {
///     field: "start_time".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required input: start_time");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A required request field was empty or absent.
    #[error("Missing required input: {field}")]
    MissingInput {
        /// The name of the missing field.
        field: String,
    },

    /// The shift does not end strictly after it starts.
    #[error("Invalid shift window: end time {end} is not after start time {start}")]
    InvalidShiftWindow {
        /// The start time as supplied.
        start: String,
        /// The end time as supplied.
        end: String,
    },

    /// A time string could not be parsed as `HH:MM`.
    #[error("Malformed time for '{field}': '{value}' (expected HH:MM)")]
    MalformedTime {
        /// The request field holding the time.
        field: String,
        /// The value that failed to parse.
        value: String,
    },

    /// A date string could not be parsed as an ISO date.
    #[error("Malformed date: '{value}' (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The value that failed to parse.
        value: String,
    },

    /// A break duration was rejected by the strict parser.
    #[error("Invalid break '{value}': {message}")]
    InvalidBreak {
        /// The value that was rejected.
        value: String,
        /// A description of why it was rejected.
        message: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
