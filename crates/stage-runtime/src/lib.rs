//! Stage Runtime - Round driver
//!
//! Runs a stage round as a single tokio task:
//! 1. Validate participants and configuration on activation
//! 2. Step the countdown once per tick, checking for a last participant standing
//! 3. Sleep one tick interval of real time between steps
//! 4. On expiry, request destruction of every remaining participant
//!
//! Entity lifetimes and diagnostics are delegated to a [`StageHost`].

pub mod event;
pub mod host;
pub mod timer;

pub use event::*;
pub use host::*;
pub use timer::*;
