//! JSON file store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{HighScoreStore, StoreError};

/// On-disk record: a JSON object with a single integer field.
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// High-score store backed by a JSON file at a fixed path.
///
/// A missing or unparsable file surfaces as an error from `load`; the
/// engine maps that to "no prior high score". `save` overwrites the
/// whole file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store reading and writing the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        let record: HighScoreRecord =
            serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(record.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        let record = HighScoreRecord { high_score };
        let raw = serde_json::to_string(&record)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
