//! # rust-2048
//!
//! A 2048 game-state engine: grid representation, directional move
//! resolution (compress + merge), tile spawning, win/loss detection,
//! scoring, and per-session undo. The crate is the model only -
//! presentation and event wiring live in whatever view/controller
//! consumes it.
//!
//! ## Design Principles
//!
//! 1. **One kernel**: all four directions reduce to a single left-biased
//!    line-merge function via reversal and column extraction. There is
//!    no duplicated merge logic.
//!
//! 2. **Request/response only**: the engine never pushes events. Callers
//!    drive it with moves and read state back as independent snapshots.
//!
//! 3. **Injected edges**: randomness ([`RandomSource`]) and high-score
//!    persistence ([`HighScoreStore`]) are constructor-injected traits,
//!    so tests script spawns and swap file I/O for memory.
//!
//! 4. **Commit-or-revert**: a move either fully commits (board, score,
//!    history, flags together) or leaves no trace. Persistence failures
//!    are logged and never block gameplay.
//!
//! ## Modules
//!
//! - `core`: board, directions, merge kernel, RNG, configuration
//! - `engine`: move orchestration, undo history, snapshots
//! - `store`: high-score persistence (JSON file, in-memory)
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, EngineBuilder};
//!
//! let mut engine = EngineBuilder::new().seed(42).build();
//! let moved = engine.make_move(Direction::Left);
//!
//! let state = engine.snapshot();
//! assert_eq!(state.board.size(), 4);
//! assert_eq!(engine.history_len(), usize::from(moved));
//! ```

pub mod core;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use crate::core::{merge_line_left, Board, Direction, EngineConfig, GameRng, RandomSource};

pub use crate::engine::{EngineBuilder, GameEngine, GameSnapshot, History, MoveRecord};

pub use crate::store::{HighScoreStore, JsonFileStore, MemoryStore, StoreError};
