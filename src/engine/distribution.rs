//! Initial card distribution at game start.
//!
//! ## Modes
//!
//! - `None`: every card starts unassigned
//! - `Random`: shuffle the catalog, then deal round-robin in shuffle order
//! - `Manual`: caller-supplied assignments merged over an all-unassigned base
//!
//! Random mode is a permutation followed by round-robin, never an
//! independent draw per card, so per-player counts differ by at most one.

use crate::cards::{CardCatalog, CardId};
use crate::core::{CardOwnership, PlayerId, Shuffler};

/// How cards are handed out when a game starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DistributionMode {
    /// All cards unassigned.
    #[default]
    None,
    /// Shuffle then deal round-robin across the current players.
    Random,
    /// Partial or complete assignments. Entries not supplied stay
    /// unassigned; referenced player ids are not checked.
    Manual(CardOwnership),
}

/// Compute the opening ownership map.
///
/// The result always has exactly one entry per catalog card, plus any extra
/// keys a manual mapping supplies.
pub fn initial_ownership(
    mode: &DistributionMode,
    players: &[PlayerId],
    catalog: &CardCatalog,
    shuffler: &mut dyn Shuffler,
) -> CardOwnership {
    let base = CardOwnership::unassigned(catalog);

    match mode {
        DistributionMode::None => base,
        DistributionMode::Random => deal_round_robin(base, players, catalog, shuffler),
        DistributionMode::Manual(assignments) => base.merged_with(assignments),
    }
}

fn deal_round_robin(
    mut ownership: CardOwnership,
    players: &[PlayerId],
    catalog: &CardCatalog,
    shuffler: &mut dyn Shuffler,
) -> CardOwnership {
    if players.is_empty() {
        return ownership;
    }

    let mut deck: Vec<CardId> = catalog.ids().cloned().collect();
    shuffler.shuffle_cards(&mut deck);

    for (position, card) in deck.into_iter().enumerate() {
        let owner = players[position % players.len()].clone();
        ownership.set(card, Some(owner));
    }

    ownership
}
