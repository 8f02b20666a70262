//! Random permutation source for card distribution.
//!
//! ## Key Features
//!
//! - **Substitutable**: The engine only sees the `Shuffler` trait, so tests
//!   can supply a fixed ordering
//! - **Deterministic**: Same seed produces the identical permutation
//! - **Serializable**: O(1) state capture and restore, so a host can
//!   persist the shuffler alongside the game
//!
//! ## Usage
//!
//! ```
//! use golf_cards::core::{GameRng, Shuffler};
//! use golf_cards::cards::CardId;
//!
//! let mut cards: Vec<CardId> = ["a", "b", "c", "d"].into_iter().map(CardId::from).collect();
//! let mut again = cards.clone();
//!
//! GameRng::new(7).shuffle_cards(&mut cards);
//! GameRng::new(7).shuffle_cards(&mut again);
//! assert_eq!(cards, again);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A source of uniform random permutations.
///
/// Implementations must visit every element exactly once; the distribution
/// step relies on the output being a permutation of its input.
pub trait Shuffler {
    /// Permute `cards` in place.
    fn shuffle_cards(&mut self, cards: &mut [CardId]);
}

/// Seedable ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Shuffler for GameRng {
    fn shuffle_cards(&mut self, cards: &mut [CardId]) {
        self.shuffle(cards);
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<CardId> {
        (0..n).map(|i| CardId::new(format!("c{i}"))).collect()
    }

    #[test]
    fn test_determinism() {
        let mut a = cards(18);
        let mut b = cards(18);

        GameRng::new(42).shuffle_cards(&mut a);
        GameRng::new(42).shuffle_cards(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut a = cards(18);
        let mut b = cards(18);

        GameRng::new(1).shuffle_cards(&mut a);
        GameRng::new(2).shuffle_cards(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let original = cards(18);
        let mut shuffled = original.clone();

        rng.shuffle_cards(&mut shuffled);

        assert_ne!(shuffled, original);
        shuffled.sort();
        let mut sorted = original;
        sorted.sort();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        let mut warmup = cards(10);
        rng.shuffle_cards(&mut warmup);

        let state = rng.state();
        let mut expected = cards(18);
        rng.shuffle_cards(&mut expected);

        let mut restored = GameRng::from_state(&state);
        let mut actual = cards(18);
        restored.shuffle_cards(&mut actual);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
