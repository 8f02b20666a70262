//! Read-side scoring over card ownership.
//!
//! Nothing here is stored in `GameState`; every view is recomputed from the
//! current ownership (or, for the scorecard, from the history snapshots).
//! Lower net score is better, as in golf.

pub mod scorecard;

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardDefinition, CardKind};
use crate::core::{GameState, PlayerId};

pub use scorecard::{scorecard, ScorecardRow};

/// One player's card tally.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub penalty_count: u32,
    pub reward_count: u32,
    /// `penalty_count - reward_count`, floored at zero.
    pub net_score: u32,
}

/// Tally the catalog cards `player` currently holds.
///
/// Ownership entries for ids outside the catalog are ignored.
#[must_use]
pub fn score_player(state: &GameState, catalog: &CardCatalog, player: &PlayerId) -> PlayerScore {
    let (mut penalty_count, mut reward_count) = (0, 0);
    for card in catalog.iter() {
        if state.ownership.owner_of(&card.id) != Some(player) {
            continue;
        }
        match card.kind {
            CardKind::Penalty => penalty_count += 1,
            CardKind::Reward => reward_count += 1,
        }
    }

    PlayerScore {
        player_id: player.clone(),
        penalty_count,
        reward_count,
        net_score: penalty_count.saturating_sub(reward_count),
    }
}

/// Scores for every player, in player order.
#[must_use]
pub fn scores(state: &GameState, catalog: &CardCatalog) -> Vec<PlayerScore> {
    state
        .player_ids()
        .map(|id| score_player(state, catalog, id))
        .collect()
}

/// Scores sorted by ascending net score. Ties keep player order.
#[must_use]
pub fn leaderboard(state: &GameState, catalog: &CardCatalog) -> Vec<PlayerScore> {
    let mut board = scores(state, catalog);
    board.sort_by_key(|s| s.net_score);
    board
}

/// The top of the leaderboard. `None` without players.
#[must_use]
pub fn winner(state: &GameState, catalog: &CardCatalog) -> Option<PlayerScore> {
    leaderboard(state, catalog).into_iter().next()
}

/// Catalog cards held by `player`, in catalog order.
#[must_use]
pub fn held_cards<'a>(
    state: &GameState,
    catalog: &'a CardCatalog,
    player: &PlayerId,
) -> Vec<&'a CardDefinition> {
    catalog
        .iter()
        .filter(|card| state.ownership.owner_of(&card.id) == Some(player))
        .collect()
}
