//! Property tests over random command sequences.

use proptest::prelude::*;

use golf_cards::cards::{CardCatalog, CardId};
use golf_cards::core::{GameConfig, GameRng, GameState, GameStatus, Move, Player, PlayerId};
use golf_cards::engine::transitions::{commit_hole, rematch, start_game, undo_last_hole};
use golf_cards::engine::DistributionMode;
use golf_cards::persist::{export_json, import_json};
use golf_cards::scoring;

#[derive(Clone, Debug)]
enum Command {
    /// (catalog index, player index); an index past the roster targets an unknown id.
    Commit(Vec<(usize, usize)>),
    Undo,
    Rematch,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => prop::collection::vec((0usize..32, 0usize..5), 0..6).prop_map(Command::Commit),
        2 => Just(Command::Undo),
        1 => Just(Command::Rematch),
    ]
}

fn mode() -> impl Strategy<Value = u8> {
    0u8..3
}

fn roster(count: usize) -> GameState {
    let mut state = GameState::new();
    for i in 0..count {
        state
            .players
            .push_back(Player::with_id(format!("p{i}"), format!("Player {i}")));
    }
    state
}

fn started(players: usize, mode: u8, seed: u64, catalog: &CardCatalog) -> GameState {
    let state = roster(players);
    let mode = match mode {
        0 => DistributionMode::None,
        1 => DistributionMode::Random,
        _ => DistributionMode::Manual(
            [(CardId::from("p_pond"), Some(PlayerId::from("p0")))]
                .into_iter()
                .collect(),
        ),
    };
    start_game(&state, &mode, catalog, &mut GameRng::new(seed))
}

fn to_moves(state: &GameState, picks: &[(usize, usize)], catalog: &CardCatalog) -> Vec<Move> {
    let ids: Vec<&CardId> = catalog.ids().collect();
    picks
        .iter()
        .map(|&(card, player)| {
            let card = ids[card % ids.len()].clone();
            let from = state.ownership.owner_of(&card).cloned();
            Move::new(card, from, format!("p{player}"))
        })
        .collect()
}

fn apply(state: &GameState, cmd: &Command, catalog: &CardCatalog, config: &GameConfig) -> GameState {
    match cmd {
        Command::Commit(picks) => {
            let moves = to_moves(state, picks, catalog);
            commit_hole(state, moves, "2026-10-16T00:00:00.000Z".into(), config)
        }
        Command::Undo => undo_last_hole(state),
        Command::Rematch => rematch(state, catalog),
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold_through_play(
        players in 1usize..=4,
        mode in mode(),
        seed in any::<u64>(),
        cmds in prop::collection::vec(command(), 0..60),
    ) {
        let catalog = CardCatalog::standard();
        let config = GameConfig::default();
        let mut state = started(players, mode, seed, &catalog);
        prop_assert!(state.is_consistent(&config, &catalog));

        for cmd in &cmds {
            state = apply(&state, cmd, &catalog, &config);
            prop_assert!(state.is_consistent(&config, &catalog), "after {:?}: {:?}", cmd, state);
            prop_assert_ne!(state.status, GameStatus::Setup);
        }
    }

    #[test]
    fn prop_undo_inverts_commit(
        players in 1usize..=4,
        seed in any::<u64>(),
        warmup in prop::collection::vec(prop::collection::vec((0usize..32, 0usize..5), 0..4), 0..10),
        picks in prop::collection::vec((0usize..32, 0usize..5), 0..8),
    ) {
        let catalog = CardCatalog::standard();
        let config = GameConfig::default();
        let mut state = started(players, 1, seed, &catalog);
        for batch in &warmup {
            state = apply(&state, &Command::Commit(batch.clone()), &catalog, &config);
        }
        prop_assume!(state.status == GameStatus::Playing);

        let moves = to_moves(&state, &picks, &catalog);
        let committed = commit_hole(&state, moves, "t".into(), &config);
        prop_assert_eq!(undo_last_hole(&committed), state);
    }

    #[test]
    fn prop_random_deal_is_complete_and_balanced(
        players in 1usize..=4,
        seed in any::<u64>(),
    ) {
        let catalog = CardCatalog::standard();
        let state = started(players, 1, seed, &catalog);

        let mut counts = vec![0usize; players];
        for (_, owner) in state.ownership.iter() {
            let owner = owner.expect("every card is dealt");
            let index = state.players.iter().position(|p| &p.id == owner);
            prop_assert!(index.is_some(), "dealt to unknown player {}", owner);
            counts[index.unwrap()] += 1;
        }

        prop_assert_eq!(counts.iter().sum::<usize>(), catalog.len());
        let min = counts.iter().min().copied().unwrap_or(0);
        let max = counts.iter().max().copied().unwrap_or(0);
        prop_assert!(max - min <= 1, "counts {:?}", counts);
    }

    #[test]
    fn prop_net_score_matches_counts(
        players in 1usize..=4,
        seed in any::<u64>(),
        cmds in prop::collection::vec(command(), 0..30),
    ) {
        let catalog = CardCatalog::standard();
        let config = GameConfig::default();
        let mut state = started(players, 1, seed, &catalog);
        for cmd in &cmds {
            state = apply(&state, cmd, &catalog, &config);
        }

        let scores = scoring::scores(&state, &catalog);
        let held: usize = scores.iter().map(|s| (s.penalty_count + s.reward_count) as usize).sum();
        prop_assert!(held <= catalog.len());
        for score in &scores {
            prop_assert_eq!(score.net_score, score.penalty_count.saturating_sub(score.reward_count));
        }

        let board = scoring::leaderboard(&state, &catalog);
        prop_assert!(board.windows(2).all(|w| w[0].net_score <= w[1].net_score));
    }

    #[test]
    fn prop_json_round_trip(
        players in 1usize..=4,
        mode in mode(),
        seed in any::<u64>(),
        cmds in prop::collection::vec(command(), 0..30),
    ) {
        let catalog = CardCatalog::standard();
        let config = GameConfig::default();
        let mut state = started(players, mode, seed, &catalog);
        for cmd in &cmds {
            state = apply(&state, cmd, &catalog, &config);
        }

        let json = export_json(&state).unwrap();
        prop_assert_eq!(import_json(&json).unwrap(), state);
    }
}
