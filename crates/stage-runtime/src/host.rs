//! Host capability
//!
//! The stage never owns its participants. Destroy requests and diagnostics
//! go through [`StageHost`], implemented by whatever manages entity lifetimes.

use tokio::sync::mpsc;

use stage_core::ParticipantId;

use crate::RoundEvent;

/// Entity-lifecycle manager and diagnostic sink supplied by the embedding engine
pub trait StageHost: Send + Sync + 'static {
    /// Request removal of a participant from the host world
    fn destroy(&self, id: ParticipantId);

    /// Observe a round event. Called outside any participant-set lock, so the
    /// host may remove participants from here.
    fn on_event(&self, _event: &RoundEvent) {}
}

/// Message forwarded by [`ChannelHost`]
#[derive(Clone, Debug, PartialEq)]
pub enum HostMessage {
    Destroy(ParticipantId),
    Event(RoundEvent),
}

/// Host that forwards everything to a channel, for engines that drain
/// requests on their own frame loop
#[derive(Clone, Debug)]
pub struct ChannelHost {
    tx: mpsc::UnboundedSender<HostMessage>,
}

/// Receiving half of a [`ChannelHost`]
pub type HostReceiver = mpsc::UnboundedReceiver<HostMessage>;

impl ChannelHost {
    pub fn new() -> (Self, HostReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelHost { tx }, rx)
    }

    fn forward(&self, message: HostMessage) {
        if self.tx.send(message).is_err() {
            tracing::debug!("host receiver dropped, discarding stage message");
        }
    }
}

impl StageHost for ChannelHost {
    fn destroy(&self, id: ParticipantId) {
        self.forward(HostMessage::Destroy(id));
    }

    fn on_event(&self, event: &RoundEvent) {
        self.forward(HostMessage::Event(event.clone()));
    }
}
