//! Frame rendering for sequence playback.
//!
//! The engine drives a [`Renderer`] during playback. The terminal
//! implementation clears the screen and prints arrow art; tests
//! substitute a capturing implementation.

mod terminal;

pub use terminal::TerminalRenderer;

use crate::core::Direction;
use crate::error::GameResult;

/// Sink for played-back frames.
pub trait Renderer {
    /// Clear the display and show the arrow for `direction`.
    fn show_frame(&mut self, direction: Direction) -> GameResult<()>;

    /// Clear the display.
    fn clear(&mut self) -> GameResult<()>;
}
