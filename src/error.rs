//! Error types for the Worked-Time Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation pipeline itself is infallible by design (malformed event
//! data degrades to dropped events, never to errors); errors occur only at
//! the configuration and raw-row boundaries.

use thiserror::Error;

/// The main error type for the Worked-Time Computation Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A tracking policy contained inconsistent values.
    #[error("Invalid tracking policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// A raw event row carried an entry type the engine does not know.
    #[error("Unknown clock event type: '{value}'")]
    UnknownEventType {
        /// The unrecognized entry type value.
        value: String,
    },

    /// A raw event row carried a timestamp that could not be parsed.
    #[error("Invalid event timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The timestamp string that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
