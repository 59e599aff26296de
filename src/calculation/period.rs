//! Report period helpers.
//!
//! Every dashboard view aggregates the same events over a different
//! calendar window — today, this week, this month, this year. This module
//! centralizes that calendar arithmetic so call sites derive their
//! [`ReportRange`] from a reference instant instead of repeating it.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::range_totals::ReportRange;

/// A calendar-aligned report period relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportPeriod {
    /// Midnight to midnight of the reference day.
    Today,
    /// Monday 00:00 of the reference ISO week to the following Monday 00:00.
    ThisWeek,
    /// First of the reference month to the first of the next month.
    ThisMonth,
    /// January 1 of the reference year to January 1 of the next year.
    ThisYear,
}

/// Midnight at the start of the given day.
fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

impl ReportPeriod {
    /// Returns the concrete range for this period around `reference`.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::ReportPeriod;
    /// use chrono::NaiveDateTime;
    ///
    /// let reference = "2024-03-15T14:30:00".parse::<NaiveDateTime>().unwrap();
    /// let range = ReportPeriod::Today.range(reference);
    /// assert_eq!(range.start.unwrap().to_string(), "2024-03-15 00:00:00");
    /// assert_eq!(range.end.unwrap().to_string(), "2024-03-16 00:00:00");
    /// ```
    pub fn range(self, reference: NaiveDateTime) -> ReportRange {
        let date = reference.date();

        let (start, end) = match self {
            ReportPeriod::Today => {
                let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
                (date, next)
            }
            ReportPeriod::ThisWeek => {
                let monday = date.week(Weekday::Mon).first_day();
                let next = monday.checked_add_days(Days::new(7)).unwrap_or(monday);
                (monday, next)
            }
            ReportPeriod::ThisMonth => {
                let first = date.with_day(1).unwrap_or(date);
                let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
                (first, next)
            }
            ReportPeriod::ThisYear => {
                let first = date.with_ordinal(1).unwrap_or(date);
                let next = first.checked_add_months(Months::new(12)).unwrap_or(first);
                (first, next)
            }
        };

        ReportRange::between(midnight(start), midnight(end))
    }
}
