//! Configuration types for the tracking policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The nightly window in which worked time counts as night hours.
///
/// An `end` at or before `start` means the window crosses midnight (the
/// default 22:00–06:00 does); an `end` strictly after `start` is a same-day
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NightWindow {
    /// Wall-clock time the night window opens.
    pub start: NaiveTime,
    /// Wall-clock time the night window closes.
    pub end: NaiveTime,
}

impl NightWindow {
    /// Returns the concrete window instance anchored on the given calendar
    /// day: the instant the window opens on `anchor` and the instant it
    /// closes (on `anchor` or the following day).
    pub fn instance(&self, anchor: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let opens = anchor.and_time(self.start);
        let closes = if self.end <= self.start {
            anchor
                .checked_add_days(Days::new(1))
                .unwrap_or(anchor)
                .and_time(self.end)
        } else {
            anchor.and_time(self.end)
        };
        (opens, closes)
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default(),
        }
    }
}

/// The deployment-tunable policy for worked-time computation.
///
/// The policy is the injected context of the engine: the calculation
/// functions take it by reference instead of reaching for ambient local-time
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackingPolicy {
    /// The nightly window counted as night hours.
    pub night_window: NightWindow,
    /// The wall-clock instant at which a dangling session is closed on the
    /// calendar day of its own clock-in.
    pub day_close: NaiveTime,
}

impl TrackingPolicy {
    /// Validates the policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] for a zero-length night window
    /// (`start == end`), which would make every instant both inside and
    /// outside the window.
    pub fn validate(&self) -> EngineResult<()> {
        if self.night_window.start == self.night_window.end {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "night window start and end are both {}",
                    self.night_window.start
                ),
            });
        }
        Ok(())
    }
}

impl Default for TrackingPolicy {
    fn default() -> Self {
        Self {
            night_window: NightWindow::default(),
            day_close: NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default(),
        }
    }
}

/// Top-level structure of `policy.yaml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(super) struct PolicyFile {
    /// The tracking policy section.
    pub policy: TrackingPolicy,
}
