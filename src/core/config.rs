//! Engine configuration.
//!
//! A session is configured at construction and fixed for its lifetime.
//! The defaults reproduce the classic game: 4×4 grid, 2048 to win,
//! one spawned tile in ten is a 4.

use serde::{Deserialize, Serialize};

/// Static rules for one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid side length.
    pub size: usize,

    /// Tile value that flips the session to won.
    pub win_threshold: u32,

    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_tile_chance: f64,

    /// Tiles spawned at construction and on reset.
    pub initial_tiles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_threshold: 2048,
            four_tile_chance: 0.1,
            initial_tiles: 2,
        }
    }
}

impl EngineConfig {
    /// Create a configuration for a `size`×`size` grid with default rules.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Grid size must be at least 2");
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the winning tile value.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        assert!(
            threshold >= 4 && threshold.is_power_of_two(),
            "Win threshold must be a power of two >= 4"
        );
        self.win_threshold = threshold;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_tile_chance(mut self, chance: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&chance),
            "Spawn chance must be within [0, 1]"
        );
        self.four_tile_chance = chance;
        self
    }

    /// Set the number of tiles spawned on a fresh board.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        assert!(
            count <= self.size * self.size,
            "Initial tiles cannot exceed the cell count"
        );
        self.initial_tiles = count;
        self
    }
}
