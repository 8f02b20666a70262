//! Pure state transitions.
//!
//! Every function takes the previous `GameState` by reference and returns
//! the next one. Nothing here performs I/O, reads the clock, generates ids or
//! draws randomness on its own; the host passes those in. A command that does
//! not apply returns an unchanged clone.

use tracing::{debug, warn};

use super::distribution::{initial_ownership, DistributionMode};
use crate::cards::CardCatalog;
use crate::core::{
    CardOwnership, GameConfig, GameState, GameStatus, HistoryEntry, Move, MoveBatch, Player,
    PlayerId, Shuffler,
};

/// Append a player. No-op once `max_players` are present.
///
/// Names are not checked for uniqueness here. Phase is the caller's
/// responsibility: this works in any status.
#[must_use]
pub fn add_player(state: &GameState, player: Player, config: &GameConfig) -> GameState {
    if state.player_count() >= config.max_players {
        debug!(max = config.max_players, "player cap reached, ignoring add");
        return state.clone();
    }

    let mut next = state.clone();
    next.players.push_back(player);
    next
}

/// Remove the player with `id`, if present.
///
/// Cards already pointing at the removed player keep that id. Phase is the
/// caller's responsibility.
#[must_use]
pub fn remove_player(state: &GameState, id: &PlayerId) -> GameState {
    let mut next = state.clone();
    next.players.retain(|p| &p.id != id);
    if next.player_count() == state.player_count() {
        debug!(player = %id, "no such player, ignoring remove");
    } else if state.status != GameStatus::Setup {
        warn!(player = %id, status = ?state.status, "player removed outside setup");
    }
    next
}

/// Deal the cards and enter `Playing` at hole 1 with empty history.
#[must_use]
pub fn start_game(
    state: &GameState,
    mode: &DistributionMode,
    catalog: &CardCatalog,
    shuffler: &mut dyn Shuffler,
) -> GameState {
    if state.status != GameStatus::Setup {
        warn!(status = ?state.status, "starting a game outside setup discards progress");
    }

    let players: Vec<PlayerId> = state.player_ids().cloned().collect();
    let ownership = initial_ownership(mode, &players, catalog, shuffler);

    debug!(players = players.len(), mode = mode_name(mode), "game started");
    GameState {
        players: state.players.clone(),
        ownership,
        current_hole: 1,
        history: Default::default(),
        status: GameStatus::Playing,
    }
}

/// Record the current hole and apply its move batch.
///
/// 1. Append a history entry with the pre-move ownership and the batch verbatim
/// 2. Apply moves in order; a move whose target is not a current player is dropped
/// 3. Advance the hole; past `max_holes` the game is finished
///
/// Outside `Playing`, or when the hole counter is already at `u32::MAX`,
/// this is a no-op.
#[must_use]
pub fn commit_hole<I>(
    state: &GameState,
    moves: I,
    timestamp: String,
    config: &GameConfig,
) -> GameState
where
    I: IntoIterator<Item = Move>,
{
    if state.status != GameStatus::Playing {
        warn!(status = ?state.status, "commit outside play ignored");
        return state.clone();
    }

    let Some(next_hole) = state.current_hole.checked_add(1) else {
        warn!(hole = state.current_hole, "hole counter cannot advance, commit ignored");
        return state.clone();
    };

    let moves: MoveBatch = moves.into_iter().collect();
    let ownership = apply_moves(state, &moves);

    let entry = HistoryEntry {
        hole_number: state.current_hole,
        timestamp,
        moves,
        ownership_snapshot: state.ownership.clone(),
    };

    let status = if next_hole > config.max_holes {
        GameStatus::Finished
    } else {
        GameStatus::Playing
    };

    debug!(hole = state.current_hole, moves = entry.moves.len(), ?status, "hole committed");

    let mut history = state.history.clone();
    history.push_back(entry);

    GameState {
        players: state.players.clone(),
        ownership,
        current_hole: next_hole,
        history,
        status,
    }
}

/// Apply a batch to the current ownership. Later moves for the same card win.
fn apply_moves(state: &GameState, moves: &[Move]) -> CardOwnership {
    let mut ownership = state.ownership.clone();
    for m in moves {
        if state.has_player(&m.to_player_id) {
            ownership.set(m.card_id.clone(), Some(m.to_player_id.clone()));
        } else {
            warn!(card = %m.card_id, target = %m.to_player_id, "dropping move to unknown player");
        }
    }
    ownership
}

/// Pop the last hole and restore its snapshot. Works from `Finished` too.
#[must_use]
pub fn undo_last_hole(state: &GameState) -> GameState {
    let Some(last) = state.history.last() else {
        debug!("nothing to undo");
        return state.clone();
    };

    let mut history = state.history.clone();
    history.pop_back();

    debug!(hole = last.hole_number, "hole undone");
    GameState {
        players: state.players.clone(),
        ownership: last.ownership_snapshot.clone(),
        current_hole: last.hole_number,
        history,
        status: GameStatus::Playing,
    }
}

/// Discard everything, players included.
#[must_use]
pub fn reset_game() -> GameState {
    debug!("game reset");
    GameState::new()
}

/// Same players, fresh round: hole 1, no history, every card unassigned.
#[must_use]
pub fn rematch(state: &GameState, catalog: &CardCatalog) -> GameState {
    if state.status != GameStatus::Finished {
        debug!(status = ?state.status, "rematch requested before the round finished");
    }

    GameState {
        players: state.players.clone(),
        ownership: CardOwnership::unassigned(catalog),
        current_hole: 1,
        history: Default::default(),
        status: GameStatus::Playing,
    }
}

fn mode_name(mode: &DistributionMode) -> &'static str {
    match mode {
        DistributionMode::None => "none",
        DistributionMode::Random => "random",
        DistributionMode::Manual(_) => "manual",
    }
}
