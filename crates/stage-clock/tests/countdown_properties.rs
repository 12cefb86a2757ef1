//! Property tests for the countdown state machine

use proptest::prelude::*;
use stage_clock::{Countdown, Step};

proptest! {
    /// Without eliminations the round expires after ceil(duration) ticks.
    #[test]
    fn expires_after_ceil_duration(duration in 0.01f64..500.0, alive in 2usize..64) {
        let mut countdown = Countdown::new(duration);
        let mut continues = 0u64;

        let end = loop {
            match countdown.step(alive) {
                Step::Continue { .. } => continues += 1,
                terminal => break terminal,
            }
        };

        let expected = duration.ceil() as u64;
        prop_assert_eq!(continues, expected);
        prop_assert_eq!(end, Step::Expired { tick: expected });
    }

    /// Reaching one survivor at tick k < duration ends the round at tick k.
    #[test]
    fn last_standing_at_elimination_tick(duration in 2u64..200, k_seed in 0u64..1000) {
        let k = k_seed % duration;
        let mut countdown = Countdown::new(duration as f64);

        for tick in 0..k {
            let step = countdown.step(3);
            prop_assert!(matches!(step, Step::Continue { .. }), "expected Continue, got {:?}", step);
            prop_assert_eq!(step.tick(), tick);
        }

        prop_assert_eq!(countdown.step(1), Step::LastStanding { tick: k });
        prop_assert_eq!(countdown.step(2), Step::LastStanding { tick: k });
        prop_assert_eq!(countdown.tick(), k);
    }

    /// Reported remaining time strictly decreases by one unit per tick.
    #[test]
    fn remaining_decreases_by_one(duration in 1.0f64..100.0) {
        let mut countdown = Countdown::new(duration);
        let mut previous: Option<f64> = None;

        while let Step::Continue { remaining, .. } = countdown.step(5) {
            prop_assert!(remaining > 0.0);
            if let Some(prev) = previous {
                prop_assert!((prev - remaining - 1.0).abs() < 1e-9);
            }
            previous = Some(remaining);
        }
    }
}
