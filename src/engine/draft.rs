//! Pending moves for the hole being played.
//!
//! The play screen collects card reassignments one at a time before the
//! hole is committed. A card appears at most once in a draft: tapping a
//! card that already has a pending move cancels that move instead of
//! adding a second one. Start a new draft whenever the hole changes.

use crate::cards::CardId;
use crate::core::{CardOwnership, Move, MoveBatch, PlayerId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleDraft {
    hole: u32,
    moves: MoveBatch,
}

impl HoleDraft {
    /// Empty draft for `hole`.
    #[must_use]
    pub fn new(hole: u32) -> Self {
        Self {
            hole,
            moves: MoveBatch::new(),
        }
    }

    /// The hole this draft was opened for.
    #[must_use]
    pub fn hole(&self) -> u32 {
        self.hole
    }

    /// Cancel the pending move for `card`. Returns `true` if one was removed.
    pub fn toggle(&mut self, card: &CardId) -> bool {
        let before = self.moves.len();
        self.moves.retain(|m| &m.card_id != card);
        self.moves.len() != before
    }

    /// Queue `card` to move to `to`, recording its current holder.
    ///
    /// Replaces any pending move for the same card.
    pub fn assign(&mut self, card: CardId, to: PlayerId, ownership: &CardOwnership) {
        self.toggle(&card);
        let from = ownership.owner_of(&card).cloned();
        self.moves.push(Move {
            card_id: card,
            from_player_id: from,
            to_player_id: to,
        });
    }

    /// Whether `card` has a pending move.
    #[must_use]
    pub fn is_pending(&self, card: &CardId) -> bool {
        self.moves.iter().any(|m| &m.card_id == card)
    }

    /// The pending target for `card`, if any.
    #[must_use]
    pub fn target_of(&self, card: &CardId) -> Option<&PlayerId> {
        self.moves
            .iter()
            .find(|m| &m.card_id == card)
            .map(|m| &m.to_player_id)
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Hand the batch over for `commit_hole`.
    #[must_use]
    pub fn into_moves(self) -> MoveBatch {
        self.moves
    }
}
