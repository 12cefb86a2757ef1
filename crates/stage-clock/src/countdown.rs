//! Round countdown

use stage_core::StageConfig;

/// Time added to `elapsed` by every completed tick
pub const TICK_UNIT: f64 = 1.0;

/// Result of one countdown step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Round continues; wait one tick interval before stepping again
    Continue {
        /// Index of the tick just taken, starting at 0
        tick: u64,
        /// `duration - elapsed` as seen before this tick advanced the clock
        remaining: f64,
    },
    /// Exactly one participant is left; the round ends without expiry
    LastStanding { tick: u64 },
    /// Elapsed time reached the duration
    Expired { tick: u64 },
}

impl Step {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Step::Continue { .. })
    }

    /// Tick at which this step was taken
    #[inline]
    pub fn tick(&self) -> u64 {
        match *self {
            Step::Continue { tick, .. } | Step::LastStanding { tick } | Step::Expired { tick } => {
                tick
            }
        }
    }
}

/// Countdown over a fixed duration
///
/// INVARIANT: once a terminal step is produced, every later call to
/// [`Countdown::step`] returns that same step and the clock never moves again.
#[derive(Clone, Debug)]
pub struct Countdown {
    duration: f64,
    elapsed: f64,
    tick: u64,
    terminal: Option<Step>,
}

impl Countdown {
    /// Create a countdown starting at zero elapsed time.
    /// A NaN duration expires on the first step.
    pub fn new(duration: f64) -> Self {
        Countdown {
            duration,
            elapsed: 0.0,
            tick: 0,
            terminal: None,
        }
    }

    pub fn from_config(config: &StageConfig) -> Self {
        Self::new(config.duration)
    }

    /// Take one step given the number of participants still alive.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn step(&mut self, alive: usize) -> Step {
        if let Some(done) = self.terminal {
            return done;
        }

        // Written as a negation so a NaN duration ends the round
        if !(self.elapsed < self.duration) {
            return self.finish(Step::Expired { tick: self.tick });
        }

        if alive == 1 {
            return self.finish(Step::LastStanding { tick: self.tick });
        }

        let step = Step::Continue {
            tick: self.tick,
            remaining: self.duration - self.elapsed,
        };
        self.elapsed += TICK_UNIT;
        self.tick += 1;
        step
    }

    fn finish(&mut self, step: Step) -> Step {
        self.terminal = Some(step);
        step
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time left before expiry, never negative
    pub fn remaining(&self) -> f64 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Number of ticks taken so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_done(&self) -> bool {
        self.terminal.is_some()
    }

    /// Terminal step, if the countdown has ended
    pub fn outcome(&self) -> Option<Step> {
        self.terminal
    }
}
