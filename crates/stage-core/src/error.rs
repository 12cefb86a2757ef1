//! Error types for the stage timer

use thiserror::Error;

use crate::ParticipantId;

/// Stage errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    // Activation errors
    #[error("No participants in stage")]
    EmptyParticipantSet,

    #[error("Stage duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("Stage duration must be finite, got {0}")]
    NonFiniteDuration(f64),

    #[error("Tick interval must be non-zero")]
    ZeroTickInterval,

    // Participant set errors
    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    #[error("Participant set is sealed: round already started")]
    ParticipantSetSealed,

    // Configuration errors
    #[error("Invalid stage configuration: {0}")]
    InvalidConfig(String),

    // Scheduler errors
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type for stage operations
pub type StageResult<T> = Result<T, StageError>;
