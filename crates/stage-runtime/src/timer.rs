//! Stage timer - round activation and the countdown task

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};

use stage_clock::{Countdown, Step};
use stage_core::{ParticipantSet, RoundState, StageConfig, StageError, StageId, StageResult};

use crate::{BeginOutcome, RoundEvent, RoundOutcome, StageHost};

/// Per-stage countdown that ends the round when one participant remains,
/// or destroys every remaining participant when time runs out.
///
/// Dropping the timer tears down a running countdown without emitting a
/// terminal event or any destroy requests.
pub struct StageTimer<H: StageHost> {
    stage: StageId,
    config: StageConfig,
    participants: ParticipantSet,
    host: Arc<H>,
    state: watch::Receiver<RoundState>,
    /// Held until `begin` hands it to the countdown task. The channel closes
    /// when that task ends, however it ends.
    state_tx: Option<watch::Sender<RoundState>>,
    outcome: Arc<Mutex<Option<RoundOutcome>>>,
    task: Option<JoinHandle<()>>,
}

impl<H: StageHost> StageTimer<H> {
    pub fn new(
        stage: StageId,
        config: StageConfig,
        participants: ParticipantSet,
        host: Arc<H>,
    ) -> Self {
        let (state_tx, state) = watch::channel(RoundState::NotStarted);
        StageTimer {
            stage,
            config,
            participants,
            host,
            state,
            state_tx: Some(state_tx),
            outcome: Arc::new(Mutex::new(None)),
            task: None,
        }
    }

    pub fn stage_id(&self) -> StageId {
        self.stage
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Live participant set; clone it to remove participants out-of-band
    pub fn participants(&self) -> &ParticipantSet {
        &self.participants
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn state(&self) -> RoundState {
        *self.state.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Watch round state transitions
    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.state.clone()
    }

    /// Outcome of the round, once finished
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome.lock().clone()
    }

    /// Activate the round.
    ///
    /// Must be called from within a tokio runtime. Validation failures leave
    /// the round in `NotStarted` and are also reported to the host.
    pub fn begin(&mut self) -> StageResult<BeginOutcome> {
        match self.state() {
            RoundState::Running => {
                info!(stage = %self.stage, "stage already running");
                self.host.on_event(&RoundEvent::AlreadyRunning { stage: self.stage });
                return Ok(BeginOutcome::AlreadyRunning);
            }
            RoundState::Finished => {
                info!(stage = %self.stage, "stage already finished");
                self.host.on_event(&RoundEvent::AlreadyFinished { stage: self.stage });
                return Ok(BeginOutcome::AlreadyFinished);
            }
            RoundState::NotStarted => {}
        }

        let runtime = match self.check_preconditions().and_then(|_| current_runtime()) {
            Ok(runtime) => runtime,
            Err(error) => return Err(self.reject(error)),
        };
        let Some(state_tx) = self.state_tx.take() else {
            return Err(self.reject(StageError::Runtime("round state already handed off".into())));
        };

        self.participants.seal();
        advance(&state_tx, RoundState::Running);
        self.host.on_event(&RoundEvent::Started {
            stage: self.stage,
            duration: self.config.duration,
            participants: self.participants.len(),
        });

        let round = Round {
            stage: self.stage,
            config: self.config.clone(),
            participants: self.participants.clone(),
            host: Arc::clone(&self.host),
            state: state_tx,
            outcome: Arc::clone(&self.outcome),
        };
        let span = tracing::info_span!("stage_round", stage = %self.stage);
        self.task = Some(runtime.spawn(round.run().instrument(span)));

        Ok(BeginOutcome::Started)
    }

    /// Wait until the round finishes. Returns the last known state instead if
    /// the round was never activated or its task ended without finishing.
    pub async fn wait_finished(&self) -> RoundState {
        let mut rx = self.state.clone();
        if *rx.borrow() == RoundState::NotStarted {
            return RoundState::NotStarted;
        }
        let finished = rx.wait_for(|state| state.is_finished()).await.map(|state| *state);
        match finished {
            Ok(state) => state,
            Err(_) => {
                warn!(stage = %self.stage, "stage task ended before the round finished");
                *rx.borrow()
            }
        }
    }

    /// Wait for the countdown task to complete and return the outcome
    pub async fn join(&mut self) -> Option<RoundOutcome> {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(stage = %self.stage, error = %e, "stage task did not complete");
            }
        }
        self.outcome()
    }

    fn check_preconditions(&self) -> StageResult<()> {
        if self.participants.is_empty() {
            return Err(StageError::EmptyParticipantSet);
        }
        self.config.validate()
    }

    fn reject(&self, error: StageError) -> StageError {
        warn!(stage = %self.stage, %error, "stage not started");
        self.host.on_event(&RoundEvent::Rejected {
            stage: self.stage,
            error: error.clone(),
        });
        error
    }
}

impl<H: StageHost> Drop for StageTimer<H> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn current_runtime() -> StageResult<Handle> {
    Handle::try_current().map_err(|e| StageError::Runtime(e.to_string()))
}

/// Publish `next` only if it is a legal successor of the current state.
/// Returns whether the state changed.
fn advance(state: &watch::Sender<RoundState>, next: RoundState) -> bool {
    state.send_if_modified(|current| {
        if current.can_transition_to(next) {
            *current = next;
            true
        } else {
            warn!(from = %current, to = %next, "illegal round state transition ignored");
            false
        }
    })
}

/// State moved into the countdown task
struct Round<H: StageHost> {
    stage: StageId,
    config: StageConfig,
    participants: ParticipantSet,
    host: Arc<H>,
    state: watch::Sender<RoundState>,
    outcome: Arc<Mutex<Option<RoundOutcome>>>,
}

impl<H: StageHost> Round<H> {
    async fn run(self) {
        let mut countdown = Countdown::from_config(&self.config);
        info!(
            duration = self.config.duration,
            max_ticks = self.config.total_ticks(),
            participants = self.participants.len(),
            "stage timer started"
        );

        let outcome = loop {
            // Read once so the count and the survivor agree
            let alive = self.participants.snapshot();

            match (countdown.step(alive.len()), alive.as_slice()) {
                (Step::Continue { tick, remaining }, _) => {
                    debug!(tick, remaining, "time remaining");
                    self.host.on_event(&RoundEvent::Remaining {
                        stage: self.stage,
                        tick,
                        remaining,
                    });
                    tokio::time::sleep(self.config.tick_interval).await;
                }
                (Step::LastStanding { tick }, &[survivor]) => {
                    info!(tick, %survivor, "last participant standing, ending stage");
                    break RoundOutcome::LastStanding { survivor, tick };
                }
                // LastStanding always comes with a one-entry snapshot
                (Step::Expired { tick }, _) | (Step::LastStanding { tick }, _) => {
                    let destroyed = self.participants.drain();
                    for id in &destroyed {
                        self.host.destroy(*id);
                    }
                    info!(tick, destroyed = destroyed.len(), "stage time expired");
                    break RoundOutcome::TimeExpired { tick, destroyed };
                }
            }
        };

        self.host.on_event(&RoundEvent::from_outcome(self.stage, &outcome));
        *self.outcome.lock() = Some(outcome);
        advance(&self.state, RoundState::Finished);
    }
}
