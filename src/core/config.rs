//! Game configuration.
//!
//! The side-game has three fixed constants: hole count, player cap and the
//! storage slot the host persists snapshots under. `GameConfig::default()`
//! reproduces them; the builder methods exist so tests can play shorter
//! rounds or use a separate slot.

use serde::{Deserialize, Serialize};

/// Holes in a round.
pub const MAX_HOLES: u32 = 18;

/// Players that may join a game.
pub const MAX_PLAYERS: usize = 4;

/// Slot name for persisted snapshots.
pub const STORAGE_KEY: &str = "golf_card_game_v1";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Holes before the game finishes.
    pub max_holes: u32,

    /// Maximum simultaneous players.
    pub max_players: usize,

    /// Persistence slot key.
    pub storage_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_holes: MAX_HOLES,
            max_players: MAX_PLAYERS,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of holes.
    #[must_use]
    pub fn with_max_holes(mut self, holes: u32) -> Self {
        assert!(holes > 0, "Must have at least 1 hole");
        self.max_holes = holes;
        self
    }

    /// Set the player cap.
    #[must_use]
    pub fn with_max_players(mut self, players: usize) -> Self {
        self.max_players = players;
        self
    }

    /// Set the storage slot key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// The hole counter value of a finished game.
    #[must_use]
    pub fn finished_hole(&self) -> u32 {
        self.max_holes.saturating_add(1)
    }
}
