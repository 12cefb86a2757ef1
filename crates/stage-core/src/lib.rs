//! Stage Core - Fundamental types for the stage timer
//!
//! This crate defines the types shared by the countdown and its runtime:
//! - Participant identifiers and the live participant set
//! - Stage configuration
//! - Round state
//! - Error types

pub mod id;
pub mod participants;
pub mod config;
pub mod round;
pub mod error;

pub use id::*;
pub use participants::*;
pub use config::*;
pub use round::*;
pub use error::*;
