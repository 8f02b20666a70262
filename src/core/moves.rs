//! Moves and per-hole history.
//!
//! A `Move` reassigns one card to one player. The presentation layer
//! builds a batch of moves for a hole and submits it with `commit_hole`.
//! Each commit appends a `HistoryEntry` that carries the ownership map as it
//! was *before* the batch, so undo restores a snapshot instead of
//! computing inverse moves.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ownership::CardOwnership;
use super::player::{Player, PlayerId};
use crate::cards::CardId;

/// Move batch storage. Most holes move at most a few cards.
pub type MoveBatch = SmallVec<[Move; 4]>;

/// A proposed reassignment of one card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// The card being moved.
    pub card_id: CardId,

    /// Owner immediately before this move (`None` = unassigned).
    pub from_player_id: Option<PlayerId>,

    /// The new holder.
    pub to_player_id: PlayerId,
}

impl Move {
    #[must_use]
    pub fn new(
        card_id: impl Into<CardId>,
        from_player_id: Option<PlayerId>,
        to_player_id: impl Into<PlayerId>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            from_player_id,
            to_player_id: to_player_id.into(),
        }
    }
}

/// Record of one completed hole. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The hole these moves belong to (1-based).
    pub hole_number: u32,

    /// ISO-8601 commit time, kept verbatim across export/import.
    pub timestamp: String,

    /// The submitted batch, including moves that were dropped.
    pub moves: MoveBatch,

    /// Ownership before the moves were applied.
    pub ownership_snapshot: CardOwnership,
}

/// A move with player ids resolved to display names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveDescription {
    pub card_id: CardId,
    /// `None` when the card was unassigned or the player no longer exists.
    pub from_name: Option<String>,
    /// `None` when the target player no longer exists.
    pub to_name: Option<String>,
}

impl HistoryEntry {
    /// Resolve this hole's moves against a player list.
    pub fn describe_moves<'a, I>(&self, players: I) -> Vec<MoveDescription>
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let names: FxHashMap<&PlayerId, &str> = players
            .into_iter()
            .map(|p| (&p.id, p.name.as_str()))
            .collect();
        let name_of = |id: &PlayerId| names.get(id).map(|name| (*name).to_string());

        self.moves
            .iter()
            .map(|m| MoveDescription {
                card_id: m.card_id.clone(),
                from_name: m.from_player_id.as_ref().and_then(name_of),
                to_name: name_of(&m.to_player_id),
            })
            .collect()
    }
}
