//! Live participant set
//!
//! The set is shared between the host and the running countdown. Every clone
//! refers to the same underlying storage, so a removal made by the host is
//! visible to the next survivor check without any snapshotting.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{ParticipantId, StageError, StageResult};

#[derive(Debug, Default)]
struct Members {
    /// Insertion-ordered, unique handles
    ids: Vec<ParticipantId>,
    /// Set once the round starts; only removal is allowed afterwards
    sealed: bool,
}

/// Ordered, shared, live collection of participant handles
#[derive(Clone, Default)]
pub struct ParticipantSet {
    inner: Arc<RwLock<Members>>,
}

impl ParticipantSet {
    /// Create an empty, unsealed set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from handles, rejecting duplicates
    pub fn from_ids<I>(ids: I) -> StageResult<Self>
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        let set = Self::new();
        for id in ids {
            set.insert(id)?;
        }
        Ok(set)
    }

    /// Add a participant before the round starts
    pub fn insert(&self, id: ParticipantId) -> StageResult<()> {
        let mut members = self.inner.write();
        if members.sealed {
            return Err(StageError::ParticipantSetSealed);
        }
        if members.ids.contains(&id) {
            return Err(StageError::DuplicateParticipant(id));
        }
        members.ids.push(id);
        Ok(())
    }

    /// Remove a participant. Returns false if it was not present.
    pub fn remove(&self, id: ParticipantId) -> bool {
        let mut members = self.inner.write();
        match members.ids.iter().position(|m| *m == id) {
            Some(pos) => {
                members.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.inner.read().ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().ids.is_empty()
    }

    /// The single remaining participant, if exactly one is left
    pub fn sole_survivor(&self) -> Option<ParticipantId> {
        match self.inner.read().ids.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Copy of the current members, in insertion order
    pub fn snapshot(&self) -> Vec<ParticipantId> {
        self.inner.read().ids.clone()
    }

    /// Take every remaining member out of the set, in insertion order
    pub fn drain(&self) -> Vec<ParticipantId> {
        std::mem::take(&mut self.inner.write().ids)
    }

    /// Forbid further insertions
    pub fn seal(&self) {
        self.inner.write().sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().sealed
    }
}

impl fmt::Debug for ParticipantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.inner.read();
        f.debug_struct("ParticipantSet")
            .field("ids", &members.ids)
            .field("sealed", &members.sealed)
            .finish()
    }
}
