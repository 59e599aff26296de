//! Segment building from raw clock events.
//!
//! This module converts a raw, possibly unordered stream of clock events for
//! one employee into well-formed work segments. Malformed interleavings
//! (duplicate clock-ins, orphan breaks, orphan clock-outs) are tolerated by
//! construction: events that do not fit the current session state are
//! dropped rather than raised as errors, so bad punch data degrades to a
//! missing segment instead of a failed report.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::TrackingPolicy;
use crate::models::{ClockEvent, ClockEventType};

/// One continuous work session derived from the event stream.
///
/// `clock_out` may be synthesized: at the close-of-day instant for a
/// dangling session, or at `now` for a still-open session. The raw instants
/// are stored as given; the overnight `+24h` correction for a `clock_out`
/// earlier than its `clock_in` is the hour calculator's responsibility, not
/// the builder's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSegment {
    /// The instant the session began.
    pub clock_in: NaiveDateTime,
    /// The instant the session ended (possibly synthesized).
    pub clock_out: NaiveDateTime,
    /// Total milliseconds of break taken inside this segment.
    pub break_duration_ms: i64,
}

/// The finite-state session record folded over the sorted event stream.
#[derive(Debug, Default)]
struct SessionState {
    current_in: Option<NaiveDateTime>,
    break_start: Option<NaiveDateTime>,
    break_accum_ms: i64,
}

impl SessionState {
    /// Applies one event, returning the next state and any emitted segment.
    fn apply(mut self, event: &ClockEvent, policy: &TrackingPolicy) -> (Self, Option<WorkSegment>) {
        match event.entry_type {
            ClockEventType::ClockIn => {
                let emitted = self.current_in.map(|open_in| {
                    // A second clock-in with no intervening clock-out: close
                    // the dangling session at close-of-day of its own
                    // clock-in's calendar day, so an open shift cannot
                    // absorb a multi-day gap.
                    let synthetic_out = open_in.date().and_time(policy.day_close);
                    warn!(
                        clock_in = %open_in,
                        closed_at = %synthetic_out,
                        "dangling session closed at end of its clock-in day"
                    );
                    WorkSegment {
                        clock_in: open_in,
                        clock_out: synthetic_out,
                        break_duration_ms: self.break_accum_ms,
                    }
                });

                self.current_in = Some(event.timestamp);
                self.break_start = None;
                self.break_accum_ms = 0;
                (self, emitted)
            }
            ClockEventType::BreakStart => {
                // Only meaningful inside an open session with no break in
                // progress; a stray or repeated break-start is ignored.
                if self.current_in.is_some() && self.break_start.is_none() {
                    self.break_start = Some(event.timestamp);
                }
                (self, None)
            }
            ClockEventType::BreakEnd => {
                if self.current_in.is_some() {
                    if let Some(break_start) = self.break_start.take() {
                        let break_ms = (event.timestamp - break_start).num_milliseconds();
                        self.break_accum_ms += break_ms.max(0);
                    }
                }
                (self, None)
            }
            ClockEventType::ClockOut => {
                let emitted = self.current_in.take().map(|open_in| WorkSegment {
                    clock_in: open_in,
                    clock_out: event.timestamp,
                    break_duration_ms: self.break_accum_ms,
                });
                self.break_start = None;
                self.break_accum_ms = 0;
                (self, emitted)
            }
        }
    }

    /// Closes a still-open session at `now`, modelling "still clocked in".
    fn close_open(self, now: NaiveDateTime) -> Option<WorkSegment> {
        self.current_in.map(|open_in| WorkSegment {
            clock_in: open_in,
            clock_out: now,
            break_duration_ms: self.break_accum_ms,
        })
    }
}

/// Builds work segments from the raw clock events of one employee.
///
/// The input slice may be in any order (it is sorted internally and never
/// mutated) and may contain duplicate or malformed sequences. `now` closes a
/// session that is still open at the end of the stream; callers inject it
/// rather than the builder reading ambient local time, keeping the function
/// pure and deterministic.
///
/// Segments are emitted in chronological order of their `clock_in`. This
/// function never fails.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_segments;
/// use attendance_engine::config::TrackingPolicy;
/// use attendance_engine::models::{ClockEvent, ClockEventType};
/// use chrono::NaiveDateTime;
///
/// let parse = |s: &str| s.parse::<NaiveDateTime>().unwrap();
/// let events = vec![
///     ClockEvent::new(ClockEventType::ClockIn, parse("2024-03-01T09:00:00")),
///     ClockEvent::new(ClockEventType::ClockOut, parse("2024-03-01T17:00:00")),
/// ];
///
/// let segments = build_segments(&events, parse("2024-03-01T18:00:00"), &TrackingPolicy::default());
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].clock_out, parse("2024-03-01T17:00:00"));
/// ```
pub fn build_segments(
    events: &[ClockEvent],
    now: NaiveDateTime,
    policy: &TrackingPolicy,
) -> Vec<WorkSegment> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let mut segments = Vec::new();
    let mut state = SessionState::default();

    for event in &sorted {
        let (next_state, emitted) = state.apply(event, policy);
        state = next_state;
        if let Some(segment) = emitted {
            segments.push(segment);
        }
    }

    if let Some(segment) = state.close_open(now) {
        segments.push(segment);
    }

    segments
}
