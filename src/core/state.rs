//! Game state: the single root value of the engine.
//!
//! ## GameState
//!
//! - Players in insertion order
//! - Card ownership
//! - Current hole and per-hole history
//! - Lifecycle status (setup, playing, finished)
//!
//! Commands never patch a state in place from the outside: each one takes the
//! previous value and produces the next. `im` collections keep those copies
//! O(1), and history snapshots share structure with the live ownership map.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::moves::HistoryEntry;
use super::ownership::CardOwnership;
use super::player::{Player, PlayerId};
use crate::cards::CardCatalog;

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    /// Players are being added; no cards dealt.
    #[default]
    Setup,
    /// Holes are being played.
    Playing,
    /// Every hole has been committed.
    Finished,
}

/// Complete game state.
///
/// Serializes to the snapshot document shared by persistence and
/// import/export (`players`, `ownership`, `currentHole`, `history`,
/// `status`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Players in insertion order.
    pub players: Vector<Player>,

    /// Card -> holder. Empty during setup.
    pub ownership: CardOwnership,

    /// Hole being played (starts at 1).
    pub current_hole: u32,

    /// One entry per committed hole, oldest first.
    pub history: Vector<HistoryEntry>,

    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh setup state with no players.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vector::new(),
            ownership: CardOwnership::new(),
            current_hole: 1,
            history: Vector::new(),
            status: GameStatus::Setup,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Whether `id` refers to a current player.
    #[must_use]
    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Iterate over player ids in insertion order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().map(|p| &p.id)
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// The most recently committed hole, i.e. the one undo would revert.
    #[must_use]
    pub fn last_committed_hole(&self) -> Option<u32> {
        self.history.last().map(|entry| entry.hole_number)
    }

    /// Check the structural invariants for this state's status.
    ///
    /// - Setup: empty history and empty ownership
    /// - Playing: `1 <= current_hole <= max_holes`, `history.len() == current_hole - 1`,
    ///   ownership keys equal the catalog ids
    /// - Finished: `current_hole == max_holes + 1`, `history.len() == max_holes`,
    ///   ownership keys equal the catalog ids
    ///
    /// States loaded from corrupt or hand-edited snapshots may fail this;
    /// the engine still operates on them.
    #[must_use]
    pub fn is_consistent(&self, config: &GameConfig, catalog: &CardCatalog) -> bool {
        let history_len = self.history.len() as u64;
        match self.status {
            GameStatus::Setup => self.history.is_empty() && self.ownership.is_empty(),
            GameStatus::Playing => {
                (1..=config.max_holes).contains(&self.current_hole)
                    && history_len == u64::from(self.current_hole) - 1
                    && self.ownership.covers_exactly(catalog)
            }
            GameStatus::Finished => {
                self.current_hole == config.finished_hole()
                    && history_len == u64::from(config.max_holes)
                    && self.ownership.covers_exactly(catalog)
            }
        }
    }
}
