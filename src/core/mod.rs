//! Core types: board, directions, merge kernel, RNG, configuration.
//!
//! Everything here is pure game mechanics with no persistence or
//! session bookkeeping; the `engine` module composes these into a
//! playable session.

pub mod board;
pub mod config;
pub mod direction;
pub mod line;
pub mod rng;

pub use board::Board;
pub use config::EngineConfig;
pub use direction::Direction;
pub use line::merge_line_left;
pub use rng::{GameRng, RandomSource};
