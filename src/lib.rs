//! # golf-cards
//!
//! State engine for a penalty/reward card side-game played alongside a round
//! of golf. A fixed catalog of cards circulates between 2–4 players over the
//! holes; at the end each player's score comes from the cards they hold.
//!
//! ## Design Principles
//!
//! 1. **Whole-State Transitions**: Every command computes the entire next
//!    `GameState` from the previous one. There is never an observable
//!    intermediate state.
//!
//! 2. **Snapshot Undo**: Each history entry carries the ownership captured
//!    before its moves, so undo is a restore rather than a replay.
//!
//! 3. **Effects at the Edge**: Transitions never read the clock, generate ids
//!    or draw randomness. The `GameEngine` host supplies those and runs
//!    persistence after each accepted transition.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so keeping the
//!   previous state around costs nothing.
//!
//! - **Injectable Randomness**: Random distribution takes a `Shuffler`;
//!   `GameRng` is a seedable ChaCha8 implementation.
//!
//! ## Modules
//!
//! - `core`: Players, ownership, moves, history, state, RNG, configuration
//! - `cards`: Card definitions and the catalog
//! - `engine`: Pure transitions, distribution, hole drafts, the engine host
//! - `scoring`: Net scores, leaderboard, scorecard grid
//! - `persist`: Snapshot import/export, sanitizing loader, storage slots

pub mod cards;
pub mod core;
pub mod engine;
pub mod persist;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    CardOwnership, GameConfig, GameRng, GameState, GameStatus, HistoryEntry, Move, MoveBatch,
    Player, PlayerId, SetupError, Shuffler,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardKind};

pub use crate::engine::{DistributionMode, GameEngine, GameEngineBuilder, HoleDraft, StateObserver};

pub use crate::scoring::{PlayerScore, ScorecardRow};

pub use crate::persist::{
    Autosave, FileStore, ImportError, MemoryStore, PersistError, SnapshotStore,
};
