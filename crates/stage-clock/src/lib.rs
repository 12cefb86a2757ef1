//! Stage Clock - Countdown state machine
//!
//! This crate implements the round countdown without any scheduler:
//! - Fixed one-unit ticks
//! - Last-participant-standing detection, checked before expiry on every tick
//! - Time-expiry detection
//!
//! The caller supplies the live participant count on each step and is
//! responsible for waiting between steps.

pub mod countdown;

pub use countdown::*;
