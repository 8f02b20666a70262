//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque string identifier. Fresh ids are UUID v4 strings; imported
//! snapshots may carry ids of any shape and those are kept verbatim.
//!
//! ## Player
//!
//! An id plus a display name. The engine keeps players in insertion order,
//! which drives display order and round-robin card distribution.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, unique identifier.
    ///
    /// ```
    /// use golf_cards::core::PlayerId;
    ///
    /// let a = PlayerId::generate();
    /// let b = PlayerId::generate();
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A participant in the side-game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::generate(), name)
    }

    /// Create a player with a known id (imports, tests).
    #[must_use]
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Reasons a setup screen rejects a new player name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player name is empty")]
    EmptyName,

    #[error("a player named {0:?} already exists")]
    DuplicateName(String),

    #[error("at most {0} players can join")]
    TooManyPlayers(usize),
}

/// Check a candidate name against the current roster.
///
/// Returns the trimmed name on success. The engine itself accepts any name;
/// this is the policy the setup screen applies before calling `add_player`.
pub fn validate_player_name<'a, I>(
    players: I,
    raw: &str,
    max_players: usize,
) -> Result<String, SetupError>
where
    I: IntoIterator<Item = &'a Player>,
{
    let name = raw.trim();
    if name.is_empty() {
        return Err(SetupError::EmptyName);
    }

    let mut count = 0;
    for player in players {
        if player.name == name {
            return Err(SetupError::DuplicateName(name.to_string()));
        }
        count += 1;
    }

    if count >= max_players {
        return Err(SetupError::TooManyPlayers(max_players));
    }

    Ok(name.to_string())
}
