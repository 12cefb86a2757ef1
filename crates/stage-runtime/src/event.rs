//! Round events and outcomes

use stage_core::{ParticipantId, StageError, StageId};

/// Result of a `begin` call that did not fail validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeginOutcome {
    /// A new countdown was spawned
    Started,
    /// A countdown is already running; nothing was spawned
    AlreadyRunning,
    /// The round has completed and cannot be restarted
    AlreadyFinished,
}

/// How a round ended
#[derive(Clone, Debug, PartialEq)]
pub enum RoundOutcome {
    /// One participant was left before time ran out. It is not destroyed.
    LastStanding { survivor: ParticipantId, tick: u64 },
    /// Time ran out; every participant still present was destroyed
    TimeExpired {
        tick: u64,
        destroyed: Vec<ParticipantId>,
    },
}

impl RoundOutcome {
    /// Tick at which the round ended
    pub fn tick(&self) -> u64 {
        match self {
            RoundOutcome::LastStanding { tick, .. } | RoundOutcome::TimeExpired { tick, .. } => {
                *tick
            }
        }
    }

    pub fn survivor(&self) -> Option<ParticipantId> {
        match self {
            RoundOutcome::LastStanding { survivor, .. } => Some(*survivor),
            RoundOutcome::TimeExpired { .. } => None,
        }
    }
}

/// Diagnostic events delivered to the host
#[derive(Clone, Debug, PartialEq)]
pub enum RoundEvent {
    /// Activation was refused; the round did not start
    Rejected { stage: StageId, error: StageError },
    Started {
        stage: StageId,
        duration: f64,
        participants: usize,
    },
    AlreadyRunning { stage: StageId },
    AlreadyFinished { stage: StageId },
    /// Informational time report, emitted once per non-terminal tick
    Remaining {
        stage: StageId,
        tick: u64,
        remaining: f64,
    },
    LastStanding {
        stage: StageId,
        tick: u64,
        survivor: ParticipantId,
    },
    TimeExpired {
        stage: StageId,
        tick: u64,
        destroyed: Vec<ParticipantId>,
    },
}

impl RoundEvent {
    pub fn stage(&self) -> StageId {
        match self {
            RoundEvent::Rejected { stage, .. }
            | RoundEvent::Started { stage, .. }
            | RoundEvent::AlreadyRunning { stage }
            | RoundEvent::AlreadyFinished { stage }
            | RoundEvent::Remaining { stage, .. }
            | RoundEvent::LastStanding { stage, .. }
            | RoundEvent::TimeExpired { stage, .. } => *stage,
        }
    }

    /// Whether this event marks the end of the round
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RoundEvent::LastStanding { .. } | RoundEvent::TimeExpired { .. }
        )
    }

    pub(crate) fn from_outcome(stage: StageId, outcome: &RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::LastStanding { survivor, tick } => RoundEvent::LastStanding {
                stage,
                tick: *tick,
                survivor: *survivor,
            },
            RoundOutcome::TimeExpired { tick, destroyed } => RoundEvent::TimeExpired {
                stage,
                tick: *tick,
                destroyed: destroyed.clone(),
            },
        }
    }
}
