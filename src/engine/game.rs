//! The engine host: owns the one mutable `GameState`.
//!
//! Each command computes the next state with a pure transition, swaps it
//! in whole, then notifies observers (autosave, UI refresh). Readers only
//! ever see a committed state. Commands that change nothing do not notify.
//!
//! ## Usage
//!
//! ```
//! use golf_cards::core::{GameRng, GameStatus, Move};
//! use golf_cards::engine::{DistributionMode, GameEngine};
//!
//! let mut engine = GameEngine::builder().shuffler(GameRng::new(42)).build();
//! engine.add_player("Aki");
//! engine.add_player("Ben");
//! engine.start_game(DistributionMode::Random);
//!
//! let aki = engine.state().players[0].id.clone();
//! engine.commit_hole(vec![Move::new("p_pond", None, aki)]);
//!
//! assert_eq!(engine.state().current_hole, 2);
//! assert_eq!(engine.state().status, GameStatus::Playing);
//! ```

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use super::distribution::DistributionMode;
use super::transitions;
use crate::cards::CardCatalog;
use crate::core::{GameConfig, GameRng, GameState, Move, Player, PlayerId, Shuffler};
use crate::persist::{self, Autosave, PersistError, SnapshotStore};
use crate::scoring::{self, PlayerScore};

/// Notified after every transition that changed the state.
pub trait StateObserver {
    fn on_transition(&mut self, state: &GameState);
}

/// Source of history timestamps.
pub type Clock = Box<dyn Fn() -> String + Send>;

/// Current UTC time as ISO-8601 with milliseconds.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct GameEngine {
    config: GameConfig,
    catalog: Arc<CardCatalog>,
    shuffler: Box<dyn Shuffler + Send>,
    clock: Clock,
    observers: Vec<Box<dyn StateObserver + Send>>,
    state: GameState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameEngine {
    /// Engine with the standard configuration and catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::default()
    }

    /// The latest committed state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Attach an observer after construction.
    pub fn subscribe(&mut self, observer: impl StateObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn replace(&mut self, next: GameState) -> &GameState {
        if next != self.state {
            self.state = next;
            for observer in &mut self.observers {
                observer.on_transition(&self.state);
            }
        }
        &self.state
    }

    // === Setup ===

    /// Add a player with a fresh id. No-op at the player cap.
    pub fn add_player(&mut self, name: &str) -> &GameState {
        let next = transitions::add_player(&self.state, Player::new(name), &self.config);
        self.replace(next)
    }

    /// Remove a player. Intended for the setup phase only.
    pub fn remove_player(&mut self, id: &PlayerId) -> &GameState {
        let next = transitions::remove_player(&self.state, id);
        self.replace(next)
    }

    /// Deal cards and begin hole 1.
    pub fn start_game(&mut self, mode: DistributionMode) -> &GameState {
        let next =
            transitions::start_game(&self.state, &mode, &self.catalog, self.shuffler.as_mut());
        self.replace(next)
    }

    // === Play ===

    /// Commit the current hole with its move batch.
    pub fn commit_hole(&mut self, moves: impl IntoIterator<Item = Move>) -> &GameState {
        let next = transitions::commit_hole(&self.state, moves, (self.clock)(), &self.config);
        self.replace(next)
    }

    /// Revert the most recent hole. No-op without history.
    pub fn undo_last_hole(&mut self) -> &GameState {
        let next = transitions::undo_last_hole(&self.state);
        self.replace(next)
    }

    /// Back to an empty setup.
    pub fn reset_game(&mut self) -> &GameState {
        self.replace(transitions::reset_game())
    }

    /// New round with the same players.
    pub fn rematch(&mut self) -> &GameState {
        let next = transitions::rematch(&self.state, &self.catalog);
        self.replace(next)
    }

    // === Import / Export ===

    /// Replace the whole state from a snapshot document.
    ///
    /// Returns `false` and leaves the state untouched if the payload is not
    /// JSON or lacks `players`, `ownership` or `status`.
    pub fn import_state(&mut self, raw: &str) -> bool {
        match persist::import_json(raw) {
            Ok(next) => {
                info!(players = next.player_count(), status = ?next.status, "state imported");
                self.replace(next);
                true
            }
            Err(e) => {
                warn!("import rejected: {e}");
                false
            }
        }
    }

    /// The snapshot document for the current state.
    pub fn export_state(&self) -> Result<String, PersistError> {
        persist::export_json(&self.state)
    }

    // === Derived views ===

    /// Scores for every player, in player order.
    #[must_use]
    pub fn scores(&self) -> Vec<PlayerScore> {
        scoring::scores(&self.state, &self.catalog)
    }

    /// Scores sorted best (lowest net) first.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<PlayerScore> {
        scoring::leaderboard(&self.state, &self.catalog)
    }
}

/// Builder for `GameEngine`.
pub struct GameEngineBuilder {
    config: GameConfig,
    catalog: Arc<CardCatalog>,
    shuffler: Option<Box<dyn Shuffler + Send>>,
    clock: Option<Clock>,
    observers: Vec<Box<dyn StateObserver + Send>>,
    state: Option<GameState>,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: CardCatalog::standard(),
            shuffler: None,
            clock: None,
            observers: Vec::new(),
            state: None,
        }
    }
}

impl GameEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: Arc<CardCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Permutation source for random distribution (default: entropy-seeded `GameRng`).
    #[must_use]
    pub fn shuffler(mut self, shuffler: impl Shuffler + Send + 'static) -> Self {
        self.shuffler = Some(Box::new(shuffler));
        self
    }

    /// Timestamp source for history entries (default: `now_timestamp`).
    #[must_use]
    pub fn clock(mut self, clock: impl Fn() -> String + Send + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: impl StateObserver + Send + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Start from an existing state instead of a fresh setup.
    #[must_use]
    pub fn state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Load the configured storage slot and autosave back into it.
    #[must_use]
    pub fn restore_from<S>(self, store: Arc<S>) -> Self
    where
        S: SnapshotStore + Send + Sync + 'static,
    {
        let key = self.config.storage_key.clone();
        let state = persist::load_state(store.as_ref(), &key);
        self.state(state).observer(Autosave::new(store, key))
    }

    #[must_use]
    pub fn build(self) -> GameEngine {
        GameEngine {
            config: self.config,
            catalog: self.catalog,
            shuffler: self.shuffler.unwrap_or_else(|| Box::new(GameRng::from_entropy())),
            clock: self.clock.unwrap_or_else(|| Box::new(now_timestamp)),
            observers: self.observers,
            state: self.state.unwrap_or_default(),
        }
    }
}
