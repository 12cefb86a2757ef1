//! Identity types for the stage timer
//!
//! Participants are never held by reference. The host keeps its entities in
//! its own registry and hands the stage a stable 64-bit handle per entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Participant handle - index into a host-managed entity registry
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    #[inline]
    pub fn new(id: u64) -> Self {
        ParticipantId(id)
    }

    /// Build a handle from a registry slot and its generation.
    /// Format: \[generation:16\]\[slot:48\]
    #[inline]
    pub fn from_slot(slot: u64, generation: u16) -> Self {
        let id = ((generation as u64) << 48) | (slot & 0x0000_FFFF_FFFF_FFFF);
        ParticipantId(id)
    }

    #[inline]
    pub fn slot(self) -> u64 {
        self.0 & 0x0000_FFFF_FFFF_FFFF
    }

    #[inline]
    pub fn generation(self) -> u16 {
        (self.0 >> 48) as u16
    }
}

impl fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Participant({}:{})", self.generation(), self.slot())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.generation(), self.slot())
    }
}

/// Stage identity, used to tell concurrent rounds apart in diagnostics
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StageId(pub u64);

impl StageId {
    #[inline]
    pub fn new(id: u64) -> Self {
        StageId(id)
    }
}

impl fmt::Debug for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage({})", self.0)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
