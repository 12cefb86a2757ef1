//! Round lifecycle state

use std::fmt;

use serde::{Deserialize, Serialize};

/// Round state - transitions only move forward:
/// NotStarted -> Running -> Finished
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    NotStarted,
    Running,
    Finished,
}

impl RoundState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == RoundState::Running
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        self == RoundState::Finished
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(self, next: RoundState) -> bool {
        matches!(
            (self, next),
            (RoundState::NotStarted, RoundState::Running)
                | (RoundState::Running, RoundState::Finished)
        )
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundState::NotStarted => "not-started",
            RoundState::Running => "running",
            RoundState::Finished => "finished",
        };
        f.write_str(name)
    }
}
