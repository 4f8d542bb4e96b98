//! Read-only state snapshots for callers.

use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Everything a view or controller needs to render a frame.
///
/// The board is an independent copy taken at snapshot time; mutating
/// or holding it never touches the engine's live state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board copy.
    pub board: Board,
    /// Current session score.
    pub score: u32,
    /// Best score across sessions.
    pub high_score: u32,
    /// A tile reached the winning threshold this session.
    pub won: bool,
    /// No legal move remains.
    pub game_over: bool,
}
