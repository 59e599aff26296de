//! Range aggregation across work segments.
//!
//! The aggregator is the single entry point the daily/weekly/monthly/yearly
//! views call with different range bounds: it builds segments from the raw
//! events, clips each one to the requested range, and sums worked and night
//! durations across everything that remains.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::TrackingPolicy;
use crate::models::ClockEvent;

use super::segment_builder::{WorkSegment, build_segments};
use super::segment_hours::calculate_segment_hours;

/// Milliseconds in one hour.
const MS_PER_HOUR: i64 = 3_600_000;

/// A report range with optional bounds; a missing bound means unbounded on
/// that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportRange {
    /// Inclusive lower bound of the range, if any.
    pub start: Option<NaiveDateTime>,
    /// Inclusive upper bound of the range, if any.
    pub end: Option<NaiveDateTime>,
}

impl ReportRange {
    /// A range with no bounds: whole-history aggregation.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A range bounded on both sides.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A range bounded below only.
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A range bounded above only.
    pub fn ending_at(end: NaiveDateTime) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Clips a segment to this range. Returns the effective interval, or
    /// `None` when the segment lies entirely outside the range.
    fn clip(&self, segment: &WorkSegment) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if let Some(start) = self.start {
            if segment.clock_out < start {
                return None;
            }
        }
        if let Some(end) = self.end {
            if segment.clock_in > end {
                return None;
            }
        }

        let effective_start = match self.start {
            Some(start) => segment.clock_in.max(start),
            None => segment.clock_in,
        };
        let effective_end = match self.end {
            Some(end) => segment.clock_out.min(end),
            None => segment.clock_out,
        };

        Some((effective_start, effective_end))
    }
}

/// Summed worked and night durations across all segments in a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct RangeTotals {
    /// Summed worked milliseconds across all included, clipped segments.
    pub total_ms: i64,
    /// Summed night hours across all included, clipped segments.
    pub total_night_hours: Decimal,
}

impl RangeTotals {
    /// The summed worked time in hours as a [`Decimal`].
    pub fn total_hours(&self) -> Decimal {
        Decimal::new(self.total_ms, 0) / Decimal::new(MS_PER_HOUR, 0)
    }
}

/// Aggregates worked and night time for one employee's events over a range.
///
/// Segments partially inside the range are clipped at the bounds before
/// measuring. The clipped interval is measured with the segment's **full**
/// break duration, even when the break actually fell outside the clipped
/// window; this inherited imprecision is preserved deliberately (clipped
/// totals at range boundaries can understate worked time by the out-of-range
/// part of the break).
///
/// With no bounds, every segment is included in full — this is how annual
/// and whole-history totals are computed.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{aggregate_range, ReportRange};
/// use attendance_engine::config::TrackingPolicy;
/// use attendance_engine::models::{ClockEvent, ClockEventType};
/// use chrono::NaiveDateTime;
///
/// let parse = |s: &str| s.parse::<NaiveDateTime>().unwrap();
/// let events = vec![
///     ClockEvent::new(ClockEventType::ClockIn, parse("2024-03-01T08:00:00")),
///     ClockEvent::new(ClockEventType::ClockOut, parse("2024-03-01T20:00:00")),
/// ];
///
/// let range = ReportRange::between(parse("2024-03-01T10:00:00"), parse("2024-03-01T14:00:00"));
/// let totals = aggregate_range(&events, &range, parse("2024-03-02T00:00:00"), &TrackingPolicy::default());
/// assert_eq!(totals.total_ms, 4 * 3_600_000);
/// ```
pub fn aggregate_range(
    events: &[ClockEvent],
    range: &ReportRange,
    now: NaiveDateTime,
    policy: &TrackingPolicy,
) -> RangeTotals {
    let segments = build_segments(events, now, policy);

    let mut totals = RangeTotals::default();
    for segment in &segments {
        let Some((effective_start, effective_end)) = range.clip(segment) else {
            continue;
        };

        let hours =
            calculate_segment_hours(effective_start, effective_end, segment.break_duration_ms, policy);
        totals.total_ms += hours.worked_ms;
        totals.total_night_hours += hours.night_hours;
    }

    totals
}
