//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card.
//! Who currently holds a card is not part of the definition; that lives
//! in the ownership map of `GameState`.

use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog card (e.g. `p_pond`).
///
/// The only way the rest of the model refers to a card.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Whether holding a card counts against or for the holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardKind {
    /// Adds one to the holder's score.
    Penalty,
    /// Subtracts one from the holder's score.
    Reward,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use golf_cards::cards::{CardDefinition, CardKind};
///
/// let pond = CardDefinition::penalty("p_pond", "池").with_description("レッドゾーン含む");
///
/// assert_eq!(pond.kind, CardKind::Penalty);
/// assert_eq!(pond.description.as_deref(), Some("レッドゾーン含む"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique, stable identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Penalty or reward.
    #[serde(rename = "type")]
    pub kind: CardKind,

    /// Optional clarification of when the card applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: None,
        }
    }

    /// Create a penalty card.
    #[must_use]
    pub fn penalty(id: &str, name: impl Into<String>) -> Self {
        Self::new(id, name, CardKind::Penalty)
    }

    /// Create a reward card.
    #[must_use]
    pub fn reward(id: &str, name: impl Into<String>) -> Self {
        Self::new(id, name, CardKind::Reward)
    }

    /// Attach a description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_penalty(&self) -> bool {
        self.kind == CardKind::Penalty
    }

    #[must_use]
    pub fn is_reward(&self) -> bool {
        self.kind == CardKind::Reward
    }
}
