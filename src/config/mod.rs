//! Tracking policy configuration for the Worked-Time Computation Engine.
//!
//! The policy carries the deployment-tunable parts of the computation: the
//! night window and the close-of-day instant used to terminate dangling
//! sessions. Defaults match the statutory values (22:00–06:00 night window,
//! 23:59:59.999 day close).

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{NightWindow, TrackingPolicy};
