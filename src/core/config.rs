//! Game configuration: step count and playback speed.
//!
//! Both values are validated when set, never when read. A config that
//! exists is always valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Playback settings for a round.
///
/// Defaults to a single step at one step per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    step_count: usize,
    speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_count: 1,
            speed: 1.0,
        }
    }
}

impl GameConfig {
    /// Create a config with the default step count and speed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of steps displayed per round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStepCount`] for zero.
    pub fn set_step_count(&mut self, step_count: usize) -> GameResult<()> {
        if step_count == 0 {
            return Err(GameError::InvalidStepCount);
        }
        self.step_count = step_count;
        Ok(())
    }

    /// Set the display rate in steps per second.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSpeed`] for zero, negative, or
    /// non-finite values.
    pub fn set_speed(&mut self, speed: f64) -> GameResult<()> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(GameError::InvalidSpeed);
        }
        self.speed = speed;
        Ok(())
    }

    /// Number of steps displayed per round.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Display rate in steps per second.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Pause between displayed frames: the inverse of the speed.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }
}
