//! Calculation logic for the Worked-Time Computation Engine.
//!
//! This module contains the three stages of the worked-time pipeline —
//! segment building from raw clock events, per-segment worked/night hour
//! calculation, and range aggregation — plus the report-period helpers that
//! derive day/week/month/year bounds for the aggregator.

mod period;
mod range_totals;
mod segment_builder;
mod segment_hours;

pub use period::ReportPeriod;
pub use range_totals::{RangeTotals, ReportRange, aggregate_range};
pub use segment_builder::{WorkSegment, build_segments};
pub use segment_hours::{SegmentHours, calculate_segment_hours};
