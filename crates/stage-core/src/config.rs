//! Stage configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{StageError, StageResult};

/// Stage configuration, fixed once the round starts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Round length in ticks (one tick per elapsed second of play)
    pub duration: f64,
    /// Real-time suspension between ticks
    #[serde(default = "default_tick_interval")]
    pub tick_interval: Duration,
}

fn default_tick_interval() -> Duration {
    Duration::from_secs(1)
}

impl Default for StageConfig {
    fn default() -> Self {
        StageConfig {
            duration: 60.0,
            tick_interval: default_tick_interval(),
        }
    }
}

impl StageConfig {
    /// Configuration with the given duration and a one-second tick
    pub fn new(duration: f64) -> Self {
        StageConfig {
            duration,
            ..Self::default()
        }
    }

    /// Override the tick interval
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Parse a JSON configuration and validate it
    pub fn from_json(json: &str) -> StageResult<Self> {
        let config: StageConfig =
            serde_json::from_str(json).map_err(|e| StageError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the duration and tick interval
    pub fn validate(&self) -> StageResult<()> {
        if !self.duration.is_finite() {
            return Err(StageError::NonFiniteDuration(self.duration));
        }
        if self.duration <= 0.0 {
            return Err(StageError::NonPositiveDuration(self.duration));
        }
        if self.tick_interval.is_zero() {
            return Err(StageError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Number of ticks a round lasts if nobody wins early
    pub fn total_ticks(&self) -> u64 {
        self.duration.max(0.0).ceil() as u64
    }
}
