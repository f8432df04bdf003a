//! Crossterm-backed renderer. Owns the terminal during playback.

use std::io::{stdout, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use super::Renderer;
use crate::core::Direction;
use crate::error::GameResult;

/// Renders arrow frames to the terminal, clearing between frames.
pub struct TerminalRenderer {
    out: Stdout,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    /// Create a renderer writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Renderer for TerminalRenderer {
    fn show_frame(&mut self, direction: Direction) -> GameResult<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(self.out, "{}", direction.arrow_art())?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> GameResult<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
