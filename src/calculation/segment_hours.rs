//! Per-segment worked and night hour calculation.
//!
//! Given one work segment (clock-in, clock-out, accumulated break), this
//! module computes the net worked duration and the portion of it falling in
//! the night window. Every arithmetic step clamps at zero: the calculator
//! always returns a best-effort non-negative result, never an error.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{NightWindow, TrackingPolicy};

/// Milliseconds in one hour.
const MS_PER_HOUR: i64 = 3_600_000;

/// The worked and night durations of a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentHours {
    /// Net worked time in hours (gross minus break), never negative.
    pub total_hours: Decimal,
    /// Portion of the worked time in the night window, clamped so that
    /// `0 <= night_hours <= total_hours` always holds.
    pub night_hours: Decimal,
    /// The same net worked time in milliseconds, for millisecond-precision
    /// aggregate display.
    pub worked_ms: i64,
}

impl SegmentHours {
    /// A zero-duration result.
    pub fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            worked_ms: 0,
        }
    }
}

/// Converts a millisecond count to hours as a [`Decimal`].
fn ms_to_hours(ms: i64) -> Decimal {
    Decimal::new(ms, 0) / Decimal::new(MS_PER_HOUR, 0)
}

/// Summed overlap between `[start, end]` and every night-window instance the
/// interval can touch.
///
/// The window is anchored per calendar day; the sweep starts on the day
/// before `start` so that early-morning work (e.g. 01:00–05:00 under the
/// default 22:00–06:00 window) falls inside the instance that opened the
/// previous evening. Instances never overlap, so nothing is double counted.
fn night_overlap_ms(start: NaiveDateTime, end: NaiveDateTime, window: &NightWindow) -> i64 {
    if end <= start {
        return 0;
    }

    let mut total_ms = 0;
    let mut anchor = start.date().pred_opt().unwrap_or_else(|| start.date());
    let last_anchor = end.date();

    while anchor <= last_anchor {
        let (opens, closes) = window.instance(anchor);
        let overlap_start = start.max(opens);
        let overlap_end = end.min(closes);
        if overlap_start < overlap_end {
            total_ms += (overlap_end - overlap_start).num_milliseconds();
        }

        match anchor.succ_opt() {
            Some(next) => anchor = next,
            None => break,
        }
    }

    total_ms
}

/// Calculates worked and night hours for one segment.
///
/// A `clock_out` earlier than `clock_in` is treated as an overnight session
/// recorded in wall-clock terms and corrected by adding 24 hours before
/// measuring. Sessions longer than 24 hours recorded this way come out
/// understated; that inherited behavior is preserved deliberately, favoring
/// an always-available number over a failed report.
///
/// The break duration is deducted from gross time but never allowed to push
/// the result negative, and night hours are capped at total hours so a break
/// taken inside the night window cannot overstate night time relative to net
/// worked time.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_segment_hours;
/// use attendance_engine::config::TrackingPolicy;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s: &str| s.parse::<NaiveDateTime>().unwrap();
/// let hours = calculate_segment_hours(
///     parse("2024-03-01T09:00:00"),
///     parse("2024-03-01T17:00:00"),
///     3_600_000, // 1h break
///     &TrackingPolicy::default(),
/// );
/// assert_eq!(hours.total_hours, Decimal::new(7, 0));
/// assert_eq!(hours.night_hours, Decimal::ZERO);
/// ```
pub fn calculate_segment_hours(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    break_duration_ms: i64,
    policy: &TrackingPolicy,
) -> SegmentHours {
    // Overnight correction for wall-clock-reversed timestamps.
    let corrected_out = if clock_out < clock_in {
        clock_out + Duration::hours(24)
    } else {
        clock_out
    };

    let gross_ms = (corrected_out - clock_in).num_milliseconds().max(0);
    let worked_ms = (gross_ms - break_duration_ms.max(0)).max(0);
    let total_hours = ms_to_hours(worked_ms);

    let raw_night_hours = ms_to_hours(night_overlap_ms(
        clock_in,
        corrected_out,
        &policy.night_window,
    ));
    let night_hours = raw_night_hours.min(total_hours).max(Decimal::ZERO);

    SegmentHours {
        total_hours,
        night_hours,
        worked_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> TrackingPolicy {
        TrackingPolicy::default()
    }

    // ==========================================================================
    // SH-001: plain daytime segment, no break
    // ==========================================================================
    #[test]
    fn test_daytime_segment_no_break() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "09:00:00"),
            make_datetime("2024-03-01", "17:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("8"));
        assert_eq!(hours.night_hours, Decimal::ZERO);
        assert_eq!(hours.worked_ms, 8 * 3_600_000);
    }

    // ==========================================================================
    // SH-002: break deduction (8h gross, 1h break -> 7h)
    // ==========================================================================
    #[test]
    fn test_break_deduction() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "09:00:00"),
            make_datetime("2024-03-01", "17:00:00"),
            3_600_000,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("7"));
        assert_eq!(hours.worked_ms, 7 * 3_600_000);
    }

    // ==========================================================================
    // SH-003: early-morning work counts as night
    // ==========================================================================
    #[test]
    fn test_early_morning_segment_is_all_night() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "01:00:00"),
            make_datetime("2024-03-01", "05:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("4"));
        assert_eq!(hours.night_hours, dec("4"));
    }

    // ==========================================================================
    // SH-004: midday work has no night hours
    // ==========================================================================
    #[test]
    fn test_midday_segment_has_no_night_hours() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "10:00:00"),
            make_datetime("2024-03-01", "14:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("4"));
        assert_eq!(hours.night_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // SH-005: midnight-crossing segment entirely within the night window
    // ==========================================================================
    #[test]
    fn test_midnight_crossing_segment_all_night() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "23:00:00"),
            make_datetime("2024-03-02", "02:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("3"));
        assert_eq!(hours.night_hours, dec("3"));
    }

    // ==========================================================================
    // SH-006: wall-clock-reversed clock-out gets the +24h correction
    // ==========================================================================
    #[test]
    fn test_reversed_clock_out_corrected_by_24h() {
        // Recorded as 23:00 -> 02:00 on the same calendar day.
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "23:00:00"),
            make_datetime("2024-03-01", "02:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("3"));
        assert_eq!(hours.night_hours, dec("3"));
    }

    // ==========================================================================
    // SH-007: a full night shift spanning the whole window
    // ==========================================================================
    #[test]
    fn test_full_night_shift() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "22:00:00"),
            make_datetime("2024-03-02", "06:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("8"));
        assert_eq!(hours.night_hours, dec("8"));
    }

    // ==========================================================================
    // SH-008: a long day touches both edges of the window
    // ==========================================================================
    #[test]
    fn test_long_day_touches_both_window_edges() {
        // 05:00 -> 23:00: one hour before 06:00 plus one hour after 22:00.
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "05:00:00"),
            make_datetime("2024-03-01", "23:00:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("18"));
        assert_eq!(hours.night_hours, dec("2"));
    }

    // ==========================================================================
    // SH-009: night hours are capped at total hours
    // ==========================================================================
    #[test]
    fn test_night_hours_capped_at_total() {
        // 22:00 -> 06:00 with a 1h break taken inside the window: gross
        // night overlap is 8h but net worked time is 7h.
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "22:00:00"),
            make_datetime("2024-03-02", "06:00:00"),
            3_600_000,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("7"));
        assert_eq!(hours.night_hours, dec("7"));
    }

    // ==========================================================================
    // SH-010: zero-duration segment
    // ==========================================================================
    #[test]
    fn test_zero_duration_segment() {
        let at = make_datetime("2024-03-01", "09:00:00");
        let hours = calculate_segment_hours(at, at, 0, &policy());

        assert_eq!(hours, SegmentHours::zero());
    }

    // ==========================================================================
    // SH-011: break longer than the segment clamps to zero
    // ==========================================================================
    #[test]
    fn test_break_longer_than_segment_clamps_to_zero() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "09:00:00"),
            make_datetime("2024-03-01", "10:00:00"),
            2 * 3_600_000,
            &policy(),
        );

        assert_eq!(hours.total_hours, Decimal::ZERO);
        assert_eq!(hours.night_hours, Decimal::ZERO);
        assert_eq!(hours.worked_ms, 0);
    }

    // ==========================================================================
    // SH-012: a negative break duration is treated as zero
    // ==========================================================================
    #[test]
    fn test_negative_break_duration_treated_as_zero() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "09:00:00"),
            make_datetime("2024-03-01", "17:00:00"),
            -1_000,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("8"));
    }

    // ==========================================================================
    // SH-013: fractional durations stay exact
    // ==========================================================================
    #[test]
    fn test_fractional_hours_are_exact() {
        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "09:00:00"),
            make_datetime("2024-03-01", "11:30:00"),
            0,
            &policy(),
        );

        assert_eq!(hours.total_hours, dec("2.5"));
    }

    // ==========================================================================
    // SH-014: custom night window is honored
    // ==========================================================================
    #[test]
    fn test_custom_night_window() {
        let custom = TrackingPolicy {
            night_window: NightWindow {
                start: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
            },
            ..TrackingPolicy::default()
        };

        let hours = calculate_segment_hours(
            make_datetime("2024-03-01", "20:00:00"),
            make_datetime("2024-03-01", "23:00:00"),
            0,
            &custom,
        );

        assert_eq!(hours.total_hours, dec("3"));
        assert_eq!(hours.night_hours, dec("2"));
    }

    #[test]
    fn test_night_overlap_disjoint_instances_do_not_double_count() {
        // A 48h span covers two full window instances: 8h each.
        let overlap = night_overlap_ms(
            make_datetime("2024-03-01", "12:00:00"),
            make_datetime("2024-03-03", "12:00:00"),
            &NightWindow::default(),
        );

        assert_eq!(overlap, 16 * 3_600_000);
    }
}
