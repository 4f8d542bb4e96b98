//! Game engine: move orchestration, spawning, win/loss, undo, reset.
//!
//! ## Session lifecycle
//!
//! An engine is built once per session via [`EngineBuilder`], which
//! injects the RNG and the high-score store. Construction reads the
//! stored high score (falling back to 0 on any failure) and spawns the
//! initial tiles. From there the caller drives it move by move;
//! [`reset`](GameEngine::reset) starts a fresh session in place,
//! keeping the high score.
//!
//! ## Commit-or-revert
//!
//! A move either fully commits - board, score, history, and flags
//! updated together - or fully reverts, leaving no trace. The pre-move
//! snapshot is pushed before the board is touched and popped again if
//! the move turns out to be a no-op.

pub mod history;
pub mod snapshot;

pub use history::{History, MoveRecord};
pub use snapshot::GameSnapshot;

use crate::core::{Board, Direction, EngineConfig, GameRng, RandomSource};
use crate::store::{HighScoreStore, MemoryStore};

/// The grid engine.
///
/// Owns the board, score, phase flags, and undo history for one
/// session. Purely request/response: it never pushes events, callers
/// read state via [`snapshot`](GameEngine::snapshot) and the scalar
/// accessors.
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    score: u32,
    high_score: u32,
    won: bool,
    game_over: bool,
    history: History,
    rng: Box<dyn RandomSource>,
    store: Box<dyn HighScoreStore>,
}

/// Builder for [`GameEngine`].
///
/// Defaults: 4×4 grid, 2048 threshold, entropy-seeded [`GameRng`],
/// volatile [`MemoryStore`].
pub struct EngineBuilder {
    config: EngineConfig,
    rng: Option<Box<dyn RandomSource>>,
    store: Option<Box<dyn HighScoreStore>>,
    starting_board: Option<Board>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            rng: None,
            store: None,
            starting_board: None,
        }
    }

    /// Use an explicit configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a random source.
    #[must_use]
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Shorthand for a seeded [`GameRng`].
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.rng(GameRng::new(seed))
    }

    /// Inject a high-score store.
    #[must_use]
    pub fn store(mut self, store: impl HighScoreStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Start from a given position instead of spawning initial tiles.
    ///
    /// The board size must match the configured size and every cell
    /// must be 0 or a power of two ≥ 2. Terminal conditions already on
    /// the board are not evaluated until the first successful move.
    #[must_use]
    pub fn starting_board(mut self, board: Board) -> Self {
        self.starting_board = Some(board);
        self
    }

    /// Build the engine: load the high score, place the opening tiles.
    #[must_use]
    pub fn build(self) -> GameEngine {
        let config = self.config;
        let mut rng = self
            .rng
            .unwrap_or_else(|| Box::new(GameRng::from_entropy()));
        let store = self.store.unwrap_or_else(|| Box::new(MemoryStore::new()));

        let high_score = match store.load() {
            Ok(value) => value,
            Err(err) => {
                log::debug!("no usable stored high score, starting from 0: {err}");
                0
            }
        };

        let board = match self.starting_board {
            Some(board) => {
                assert_eq!(
                    board.size(),
                    config.size,
                    "Starting board size must match the configured size"
                );
                assert!(
                    board
                        .cells()
                        .iter()
                        .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
                    "Cells must be 0 or a power of two >= 2"
                );
                board
            }
            None => {
                let mut board = Board::new(config.size);
                for _ in 0..config.initial_tiles {
                    spawn_tile(&mut board, rng.as_mut(), config.four_tile_chance);
                }
                board
            }
        };

        GameEngine {
            config,
            board,
            score: 0,
            high_score,
            won: false,
            game_over: false,
            history: History::new(),
            rng,
            store,
        }
    }
}

impl GameEngine {
    /// Engine with all defaults (4×4, 2048, entropy RNG, volatile store).
    #[must_use]
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    // === Moves ===

    /// Resolve a move in `direction`.
    ///
    /// Returns whether the board changed. A session that has already
    /// ended (won or game over) rejects every move until
    /// [`reset`](GameEngine::reset). A move that cannot change the
    /// board is a no-op, not a turn: no tile spawns and no history
    /// record survives.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        if self.won || self.game_over {
            return false;
        }

        self.history.push(MoveRecord {
            board: self.board.clone(),
            score: self.score,
        });

        let gain = self.board.slide(direction);

        let changed = self
            .history
            .last()
            .is_some_and(|record| record.board != self.board);
        if !changed {
            self.history.pop();
            return false;
        }

        self.score += gain;
        spawn_tile(&mut self.board, self.rng.as_mut(), self.config.four_tile_chance);
        self.evaluate_endgame();
        true
    }

    /// Would `direction` change the board? Side-effect free.
    ///
    /// This ignores the terminal flags; `make_move` additionally
    /// rejects once a session has ended.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut trial = self.board.clone();
        trial.slide(direction);
        trial != self.board
    }

    /// Legality of all four moves, in [`Direction::ALL`] order.
    #[must_use]
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|direction| self.can_move(direction))
    }

    // === Undo / reset ===

    /// Rewind the most recent successful move.
    ///
    /// Restores the recorded board and score and returns `true`;
    /// returns `false` with no change when the history is empty.
    /// Terminal flags are not cleared: a session that has ended stays
    /// ended until [`reset`](GameEngine::reset).
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(record) => {
                self.board = record.board;
                self.score = record.score;
                true
            }
            None => false,
        }
    }

    /// Start a fresh session: empty board, zero score, cleared flags
    /// and history, new opening tiles. The in-memory high score is
    /// kept; the store is not re-read.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.size);
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.history.clear();
        for _ in 0..self.config.initial_tiles {
            spawn_tile(&mut self.board, self.rng.as_mut(), self.config.four_tile_chance);
        }
    }

    // === State ===

    /// Read-only snapshot with an independent board copy.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            score: self.score,
            high_score: self.high_score,
            won: self.won,
            game_over: self.game_over,
        }
    }

    /// Current session score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score across sessions.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// A tile reached the winning threshold this session.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// No legal move remains.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Endgame ===

    /// Run once per successful move. Win and loss fire independently;
    /// either one halts further moves.
    fn evaluate_endgame(&mut self) {
        if !self.won && self.board.max_tile() >= self.config.win_threshold {
            self.won = true;
            self.commit_high_score();
        }
        if !self.board.has_legal_move() {
            self.game_over = true;
            self.commit_high_score();
        }
    }

    /// Persist `max(high_score, score)` at a win/loss transition. A
    /// failed write is logged and dropped; gameplay continues.
    fn commit_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        if let Err(err) = self.store.save(self.high_score) {
            log::warn!("high-score write failed, continuing: {err}");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Place one new tile in a uniformly chosen empty cell, 4 with the
/// configured probability, else 2. Silently does nothing on a full
/// board. The position is drawn before the value.
fn spawn_tile(board: &mut Board, rng: &mut dyn RandomSource, four_tile_chance: f64) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return;
    }
    let cell = empty[rng.pick(empty.len())];
    let value = if rng.chance(four_tile_chance) { 4 } else { 2 };
    board.set_flat(cell, value);
}
