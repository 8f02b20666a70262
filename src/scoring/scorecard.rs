//! Per-hole ownership grid.
//!
//! Each row is a catalog card; column `h` holds the owner recorded in the
//! snapshot of hole `h`, i.e. who held the card when that hole was played.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId, CardKind};
use crate::core::{GameState, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardRow {
    pub card_id: CardId,
    pub kind: CardKind,
    /// Index `h - 1` is hole `h`. `None` for unassigned or unplayed holes.
    pub holders: Vec<Option<PlayerId>>,
}

impl ScorecardRow {
    /// Holder at `hole` (1-based).
    #[must_use]
    pub fn holder_at(&self, hole: u32) -> Option<&PlayerId> {
        let index = usize::try_from(hole.checked_sub(1)?).ok()?;
        self.holders.get(index)?.as_ref()
    }
}

/// Build the grid for holes `1..=max_holes`, rows in catalog order.
#[must_use]
pub fn scorecard(state: &GameState, catalog: &CardCatalog, max_holes: u32) -> Vec<ScorecardRow> {
    catalog
        .iter()
        .map(|card| {
            let holders = (1..=max_holes)
                .map(|hole| {
                    let index = usize::try_from(hole - 1).ok()?;
                    state
                        .history
                        .get(index)?
                        .ownership_snapshot
                        .owner_of(&card.id)
                        .cloned()
                })
                .collect();
            ScorecardRow {
                card_id: card.id.clone(),
                kind: card.kind,
                holders,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardOwnership, GameConfig, Move, Player};
    use crate::engine::transitions::{commit_hole, start_game};
    use crate::engine::DistributionMode;

    struct Identity;

    impl crate::core::Shuffler for Identity {
        fn shuffle_cards(&mut self, _cards: &mut [CardId]) {}
    }

    #[test]
    fn test_grid_follows_snapshots() {
        let catalog = CardCatalog::standard();
        let config = GameConfig::default();
        let mut state = GameState::new();
        state.players.push_back(Player::with_id("a", "Aki"));
        state.players.push_back(Player::with_id("b", "Ben"));
        state = start_game(&state, &DistributionMode::None, &catalog, &mut Identity);

        state = commit_hole(&state, vec![Move::new("p_pond", None, "a")], "t1".into(), &config);
        state = commit_hole(
            &state,
            vec![Move::new("p_pond", Some(PlayerId::from("a")), "b")],
            "t2".into(),
            &config,
        );
        state = commit_hole(&state, Vec::new(), "t3".into(), &config);

        let grid = scorecard(&state, &catalog, config.max_holes);
        assert_eq!(grid.len(), catalog.len());

        let pond = &grid[0];
        assert_eq!(pond.card_id, CardId::from("p_pond"));
        assert_eq!(pond.holders.len(), 18);
        assert_eq!(pond.holder_at(1), None);
        assert_eq!(pond.holder_at(2), Some(&PlayerId::from("a")));
        assert_eq!(pond.holder_at(3), Some(&PlayerId::from("b")));
        assert_eq!(pond.holder_at(4), None);
        assert_eq!(pond.holder_at(0), None);
    }

    #[test]
    fn test_empty_history() {
        let catalog = CardCatalog::standard();
        let mut state = GameState::new();
        state.ownership = CardOwnership::unassigned(&catalog);

        let grid = scorecard(&state, &catalog, 3);
        assert!(grid.iter().all(|row| row.holders == vec![None, None, None]));
    }
}
