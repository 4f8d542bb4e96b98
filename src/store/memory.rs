//! In-memory store.

use super::{HighScoreStore, StoreError};

/// Volatile high-score store.
///
/// The default when no file path is wired up, and the test double of
/// choice: seed it with [`MemoryStore::with_value`] to simulate a prior
/// session.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStore {
    high_score: u32,
}

impl MemoryStore {
    /// Empty store (high score 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a previous best.
    #[must_use]
    pub fn with_value(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.high_score = high_score;
        Ok(())
    }
}
