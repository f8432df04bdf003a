//! # arrow-recall
//!
//! A terminal memory game. The game flashes a randomized sequence of
//! directional arrows at a configurable speed, then asks the player to
//! type the sequence back and reports a verdict.
//!
//! ## Design Notes
//!
//! - **Sequence state is per-engine**: every [`SequenceEngine`] owns its
//!   own sequence. Two engines never observe each other's rounds.
//!
//! - **Rendering is a seam**: playback drives a [`Renderer`], so the
//!   crossterm-backed terminal renderer can be swapped for a capturing
//!   one in tests.
//!
//! - **Deterministic when seeded**: [`SequenceEngine::with_seed`]
//!   produces identical sequences for identical seeds.
//!
//! ## Modules
//!
//! - `core`: directions, configuration, RNG
//! - `engine`: sequence generation, playback, answer checking
//! - `render`: the `Renderer` trait and the terminal renderer
//! - `prompt`: blocking stdin/stdout prompt loops
//! - `error`: error enum and result alias

pub mod core;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Direction, GameConfig, GameRng};
pub use crate::engine::SequenceEngine;
pub use crate::error::{GameError, GameResult};
pub use crate::render::{Renderer, TerminalRenderer};
