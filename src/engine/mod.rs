//! Game rules and the engine host.
//!
//! ## Key Types
//!
//! - `transitions`: pure `(state, payload) -> state` functions
//! - `DistributionMode`: how cards are dealt when a game starts
//! - `HoleDraft`: the pending move batch for the hole being played
//! - `GameEngine`: owns the current state and notifies `StateObserver`s

pub mod distribution;
pub mod draft;
pub mod game;
pub mod transitions;

pub use distribution::{initial_ownership, DistributionMode};
pub use draft::HoleDraft;
pub use game::{now_timestamp, Clock, GameEngine, GameEngineBuilder, StateObserver};
