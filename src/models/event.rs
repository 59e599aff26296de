//! Clock event model and related types.
//!
//! This module defines the ClockEvent struct and the ClockEventType enum
//! representing the raw timestamped actions recorded by the time clock.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// The type of a raw clock event.
///
/// This is a closed enum: the persistence layer stores exactly these four
/// entry types (`clock_in`, `break_start`, `break_end`, `clock_out`).
///
/// # Example
///
/// ```
/// use attendance_engine::models::ClockEventType;
///
/// let parsed: ClockEventType = "break_start".parse().unwrap();
/// assert_eq!(parsed, ClockEventType::BreakStart);
/// assert_eq!(format!("{}", parsed), "break_start");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventType {
    /// The employee started a work session.
    ClockIn,
    /// The employee started a break within an open session.
    BreakStart,
    /// The employee ended a break within an open session.
    BreakEnd,
    /// The employee ended the open work session.
    ClockOut,
}

impl std::fmt::Display for ClockEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClockEventType::ClockIn => "clock_in",
            ClockEventType::BreakStart => "break_start",
            ClockEventType::BreakEnd => "break_end",
            ClockEventType::ClockOut => "clock_out",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ClockEventType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock_in" => Ok(ClockEventType::ClockIn),
            "break_start" => Ok(ClockEventType::BreakStart),
            "break_end" => Ok(ClockEventType::BreakEnd),
            "clock_out" => Ok(ClockEventType::ClockOut),
            other => Err(EngineError::UnknownEventType {
                value: other.to_string(),
            }),
        }
    }
}

/// A single raw clock event for one employee.
///
/// Events for a given employee are logically totally ordered by `timestamp`,
/// but callers do not guarantee order and the engine sorts defensively.
/// No uniqueness invariant is assumed: duplicate or malformed sequences
/// (e.g. two consecutive clock-ins) are tolerated downstream, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// The type of the event.
    pub entry_type: ClockEventType,
    /// The absolute instant the event occurred. All events for one employee
    /// share one consistent local timeline; the engine performs no timezone
    /// conversion.
    pub timestamp: NaiveDateTime,
}

impl ClockEvent {
    /// Creates a new clock event.
    pub fn new(entry_type: ClockEventType, timestamp: NaiveDateTime) -> Self {
        Self {
            entry_type,
            timestamp,
        }
    }

    /// Builds a clock event from the string pair stored by the persistence
    /// layer: an entry type (`"clock_in"`, `"break_start"`, `"break_end"`,
    /// `"clock_out"`) and an ISO-8601 timestamp.
    ///
    /// Timestamps with an explicit offset (e.g. a trailing `Z`) are accepted
    /// and reduced to their local wall-clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEventType`] for an unrecognized entry
    /// type and [`EngineError::InvalidTimestamp`] for an unparseable
    /// timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{ClockEvent, ClockEventType};
    ///
    /// let event = ClockEvent::from_raw("clock_in", "2024-03-01T09:00:00").unwrap();
    /// assert_eq!(event.entry_type, ClockEventType::ClockIn);
    /// ```
    pub fn from_raw(entry_type: &str, timestamp: &str) -> EngineResult<Self> {
        let entry_type = entry_type.parse::<ClockEventType>()?;

        let parsed = timestamp
            .parse::<NaiveDateTime>()
            .or_else(|_| chrono::DateTime::parse_from_rfc3339(timestamp).map(|dt| dt.naive_local()))
            .map_err(|e| EngineError::InvalidTimestamp {
                value: timestamp.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            entry_type,
            timestamp: parsed,
        })
    }
}
