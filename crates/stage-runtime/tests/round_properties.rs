//! Property tests: the async round agrees with the pure countdown

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use proptest::collection::vec;
use proptest::prelude::*;

use stage_clock::{Countdown, Step};
use stage_core::{ParticipantId, ParticipantSet, StageConfig, StageId};
use stage_runtime::{RoundEvent, RoundOutcome, StageHost, StageTimer};

/// Removes one participant per scheduled tick, in set order
struct ScriptedHost {
    set: ParticipantSet,
    schedule: Vec<u64>,
    destroyed: Mutex<Vec<ParticipantId>>,
}

impl StageHost for ScriptedHost {
    fn destroy(&self, id: ParticipantId) {
        self.destroyed.lock().push(id);
    }

    fn on_event(&self, event: &RoundEvent) {
        if let RoundEvent::Remaining { tick, .. } = event {
            for _ in self.schedule.iter().filter(|t| **t == *tick) {
                if let Some(first) = self.set.snapshot().first() {
                    self.set.remove(*first);
                }
            }
        }
    }
}

/// Replay the same schedule against the bare countdown
fn expected(duration: u64, count: usize, schedule: &[u64]) -> Step {
    let mut countdown = Countdown::new(duration as f64);
    let mut alive = count;
    loop {
        match countdown.step(alive) {
            Step::Continue { tick, .. } => {
                let removed = schedule.iter().filter(|t| **t == tick).count();
                alive = alive.saturating_sub(removed);
            }
            terminal => return terminal,
        }
    }
}

fn run_round(duration: u64, count: usize, schedule: Vec<u64>) -> (RoundOutcome, Vec<ParticipantId>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();

    runtime.block_on(async move {
        let set = ParticipantSet::from_ids((0..count as u64).map(ParticipantId::new)).unwrap();
        let host = Arc::new(ScriptedHost {
            set: set.clone(),
            schedule,
            destroyed: Mutex::new(Vec::new()),
        });
        let config = StageConfig::new(duration as f64).with_tick_interval(Duration::from_millis(100));
        let mut timer = StageTimer::new(StageId::new(1), config, set, Arc::clone(&host));

        timer.begin().unwrap();
        let outcome = timer.join().await.unwrap();
        let destroyed = host.destroyed.lock().clone();
        (outcome, destroyed)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_matches_countdown(
        duration in 1u64..20,
        count in 2usize..8,
        schedule in vec(0u64..20, 0..8),
    ) {
        let (outcome, destroyed) = run_round(duration, count, schedule.clone());

        match expected(duration, count, &schedule) {
            Step::LastStanding { tick } => {
                prop_assert_eq!(outcome.tick(), tick);
                prop_assert!(outcome.survivor().is_some());
                prop_assert!(destroyed.is_empty());
            }
            Step::Expired { tick } => {
                prop_assert_eq!(tick, duration);
                match outcome {
                    RoundOutcome::TimeExpired { tick: got, destroyed: reported } => {
                        prop_assert_eq!(got, tick);
                        prop_assert_eq!(reported, destroyed);
                    }
                    other => prop_assert!(false, "unexpected outcome {:?}", other),
                }
            }
            Step::Continue { .. } => prop_assert!(false, "countdown never ended"),
        }
    }
}
