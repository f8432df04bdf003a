//! Core game types: directions, configuration, RNG.
//!
//! These are the fundamental building blocks the engine is composed
//! from. Nothing here touches the terminal.

pub mod config;
pub mod direction;
pub mod rng;

pub use config::GameConfig;
pub use direction::Direction;
pub use rng::GameRng;
