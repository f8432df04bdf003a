//! The sequence engine: generates, plays back, and checks one round's
//! arrow sequence.

use std::thread;

use crate::core::{Direction, GameConfig, GameRng};
use crate::error::{GameError, GameResult};
use crate::render::Renderer;

/// Generates and validates the arrow sequence for one round.
///
/// Each engine owns its configuration, RNG, and sequence outright;
/// nothing is shared between instances. The sequence is rebuilt from
/// scratch on every call to [`generate_and_play`].
///
/// [`generate_and_play`]: SequenceEngine::generate_and_play
pub struct SequenceEngine {
    config: GameConfig,
    rng: GameRng,
    sequence: Vec<Direction>,
}

impl Default for SequenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceEngine {
    /// Create an engine with an entropy-seeded RNG and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create an engine with a fixed seed, for reproducible rounds.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            config: GameConfig::default(),
            rng,
            sequence: Vec::new(),
        }
    }

    /// Set the number of steps displayed per round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStepCount`] for zero.
    pub fn set_step_count(&mut self, step_count: usize) -> GameResult<()> {
        self.config.set_step_count(step_count)
    }

    /// Set the display rate in steps per second.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSpeed`] for zero, negative, or
    /// non-finite values.
    pub fn set_speed(&mut self, speed: f64) -> GameResult<()> {
        self.config.set_speed(speed)
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The sequence from the most recent round. Empty before the first
    /// round has been played.
    #[must_use]
    pub fn sequence(&self) -> &[Direction] {
        &self.sequence
    }

    /// Generate a fresh sequence and play it back on `renderer`.
    ///
    /// Any sequence from a previous round is discarded first. Each step
    /// draws a direction that differs from its predecessor (the first
    /// draw is unconstrained), records it, shows its frame, and pauses
    /// for the configured frame delay. The display is cleared after the
    /// last frame so the prompts resume on a blank screen.
    ///
    /// # Errors
    ///
    /// Propagates renderer I/O failures as [`GameError::Io`].
    pub fn generate_and_play<R: Renderer>(&mut self, renderer: &mut R) -> GameResult<()> {
        self.sequence.clear();

        let mut previous: Option<Direction> = None;
        for _ in 0..self.config.step_count() {
            let direction = self.rng.draw_direction(previous);
            previous = Some(direction);

            self.sequence.push(direction);
            renderer.show_frame(direction)?;
            thread::sleep(self.config.frame_delay());
        }

        renderer.clear()
    }

    /// Check a player's answer tokens against the last generated
    /// sequence.
    ///
    /// Returns `Ok(false)` as soon as the lengths differ, a token fails
    /// to parse, or a parsed direction mismatches its position. Returns
    /// `Ok(true)` only when every token maps to the direction at its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyAnswers`] for an empty slice. The
    /// interaction loop never submits one; doing so is a caller bug.
    pub fn check_answers<S: AsRef<str>>(&self, answers: &[S]) -> GameResult<bool> {
        if answers.is_empty() {
            return Err(GameError::EmptyAnswers);
        }

        if answers.len() != self.sequence.len() {
            return Ok(false);
        }

        for (answer, step) in answers.iter().zip(&self.sequence) {
            match Direction::from_token(answer.as_ref()) {
                Some(direction) if direction == *step => {}
                _ => return Ok(false),
            }
        }

        Ok(true)
    }
}
