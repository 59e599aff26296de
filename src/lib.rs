//! Worked-Time Computation Engine
//!
//! This crate converts raw, unordered streams of clock events (clock-in,
//! break-start, break-end, clock-out) into well-formed work segments and
//! derives worked and night-shift durations per segment, and aggregated
//! across arbitrary report ranges (day, week, month, year, whole history).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
