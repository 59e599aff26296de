//! Core data models for the Worked-Time Computation Engine.
//!
//! This module contains the domain models shared across the engine.

mod event;

pub use event::{ClockEvent, ClockEventType};
