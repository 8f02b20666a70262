//! Core types: players, ownership, moves, history, state, RNG, configuration.
//!
//! Everything here is plain data plus small helpers. The rules that move a
//! `GameState` from one value to the next live in `engine`.

pub mod config;
pub mod moves;
pub mod ownership;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, MAX_HOLES, MAX_PLAYERS, STORAGE_KEY};
pub use moves::{HistoryEntry, Move, MoveBatch, MoveDescription};
pub use ownership::CardOwnership;
pub use player::{validate_player_name, Player, PlayerId, SetupError};
pub use rng::{GameRng, GameRngState, Shuffler};
pub use state::{GameState, GameStatus};
