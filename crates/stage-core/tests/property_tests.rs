//! Property tests for participant set invariants

use proptest::collection::vec;
use proptest::prelude::*;
use stage_core::{ParticipantId, ParticipantSet, StageConfig, StageError};
use std::collections::BTreeSet;

proptest! {
    /// Members stay unique no matter what insertion order is attempted.
    #[test]
    fn members_are_unique(raw in vec(0u64..32, 0..64)) {
        let set = ParticipantSet::new();
        for id in &raw {
            let _ = set.insert(ParticipantId::new(*id));
        }

        let snapshot = set.snapshot();
        let distinct: BTreeSet<_> = snapshot.iter().copied().collect();
        prop_assert_eq!(distinct.len(), snapshot.len());
        prop_assert_eq!(distinct.len(), raw.iter().collect::<BTreeSet<_>>().len());
    }

    /// After sealing, the set never grows.
    #[test]
    fn sealed_set_never_grows(
        initial in vec(0u64..1000, 1..20),
        later in vec(1000u64..2000, 0..20),
        removals in vec(0u64..1000, 0..20),
    ) {
        let set = ParticipantSet::new();
        for id in &initial {
            let _ = set.insert(ParticipantId::new(*id));
        }
        set.seal();

        let mut last = set.len();
        for (add, del) in later.iter().zip(removals.iter().chain(std::iter::repeat(&0))) {
            prop_assert_eq!(set.insert(ParticipantId::new(*add)), Err(StageError::ParticipantSetSealed));
            set.remove(ParticipantId::new(*del));
            prop_assert!(set.len() <= last);
            last = set.len();
        }
    }

    /// Positive finite durations validate; everything else is rejected.
    #[test]
    fn duration_validation(duration in -100.0f64..100.0) {
        let result = StageConfig::new(duration).validate();
        if duration > 0.0 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(StageError::NonPositiveDuration(duration)));
        }
    }
}
