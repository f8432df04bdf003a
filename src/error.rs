//! Error types for the game.

use thiserror::Error;

/// Result type alias for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Unified error type for configuration, contract, and I/O failures.
///
/// Configuration errors are recoverable: the interaction loop reacts by
/// re-prompting. `EmptyAnswers` marks a caller contract violation that
/// the prompt loop is expected to prevent.
#[derive(Debug, Error)]
pub enum GameError {
    /// Step count must be a positive non-zero integer.
    #[error("step count must be a positive non-zero integer")]
    InvalidStepCount,

    /// Speed must be a positive non-zero finite number.
    #[error("speed must be a positive non-zero number")]
    InvalidSpeed,

    /// `check_answers` was called with an empty answer list.
    #[error("answers must be a non-empty list of direction tokens")]
    EmptyAnswers,

    /// Terminal or prompt I/O failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
