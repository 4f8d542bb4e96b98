//! High-score persistence.
//!
//! The engine persists exactly one scalar: the best score seen across
//! sessions. Where it lives is a seam - games inject a
//! [`HighScoreStore`] at construction, tests inject doubles, and the
//! engine itself never propagates store failures (reads fall back to 0,
//! writes are logged and dropped).

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors a store can surface.
///
/// These stop at the engine boundary; gameplay never fails because
/// persistence did.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure (missing file, permissions, full disk).
    #[error("high-score store I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record exists but cannot be interpreted.
    #[error("malformed high-score record: {0}")]
    Malformed(String),
}

/// Where the persisted high score lives.
pub trait HighScoreStore: Send {
    /// Read the stored high score.
    fn load(&self) -> Result<u32, StoreError>;

    /// Overwrite the stored high score.
    fn save(&mut self, high_score: u32) -> Result<(), StoreError>;
}
