//! Card ownership map.
//!
//! Maps every catalog card to the player holding it, or `None` when the
//! card is unassigned. While a game is active the key set equals the
//! catalog's id set; in setup the map is empty.
//!
//! Backed by `im::OrdMap` so history snapshots share structure with the
//! live map and cloning is O(1).

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardCatalog, CardId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardOwnership(OrdMap<CardId, Option<PlayerId>>);

impl CardOwnership {
    /// An empty map (setup phase).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog card present and unassigned.
    #[must_use]
    pub fn unassigned(catalog: &CardCatalog) -> Self {
        Self(catalog.ids().map(|id| (id.clone(), None)).collect())
    }

    /// Who holds `card`. `None` for unassigned or unknown cards.
    #[must_use]
    pub fn owner_of(&self, card: &CardId) -> Option<&PlayerId> {
        self.0.get(card).and_then(Option::as_ref)
    }

    /// Whether the map has an entry for `card` (assigned or not).
    #[must_use]
    pub fn has_entry(&self, card: &CardId) -> bool {
        self.0.contains_key(card)
    }

    /// Set the holder of `card`, returning the previous entry.
    pub fn set(&mut self, card: CardId, owner: Option<PlayerId>) -> Option<Option<PlayerId>> {
        self.0.insert(card, owner)
    }

    /// Overlay `other` on top of this map; `other` wins on conflicts.
    #[must_use]
    pub fn merged_with(&self, other: &CardOwnership) -> Self {
        Self(other.0.clone().union(self.0.clone()))
    }

    /// Whether the key set equals the catalog's id set.
    #[must_use]
    pub fn covers_exactly(&self, catalog: &CardCatalog) -> bool {
        self.0.len() == catalog.len() && catalog.ids().all(|id| self.0.contains_key(id))
    }

    /// Cards held by `player`, in card-id order.
    pub fn cards_of<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = &'a CardId> + 'a {
        self.0
            .iter()
            .filter(move |(_, owner)| owner.as_ref() == Some(player))
            .map(|(card, _)| card)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardId, Option<&PlayerId>)> {
        self.0.iter().map(|(card, owner)| (card, owner.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CardId, Option<PlayerId>)> for CardOwnership {
    fn from_iter<T: IntoIterator<Item = (CardId, Option<PlayerId>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_covers_catalog() {
        let catalog = CardCatalog::standard();
        let ownership = CardOwnership::unassigned(&catalog);

        assert_eq!(ownership.len(), 18);
        assert!(ownership.covers_exactly(&catalog));
        assert!(ownership.iter().all(|(_, owner)| owner.is_none()));
    }

    #[test]
    fn test_set_and_owner_of() {
        let mut ownership = CardOwnership::unassigned(&CardCatalog::standard());
        let pond = CardId::new("p_pond");

        let previous = ownership.set(pond.clone(), Some(PlayerId::new("a")));

        assert_eq!(previous, Some(None));
        assert_eq!(ownership.owner_of(&pond), Some(&PlayerId::new("a")));
        assert_eq!(ownership.owner_of(&CardId::new("p_ob")), None);
    }

    #[test]
    fn test_merge_overrides_base() {
        let base = CardOwnership::unassigned(&CardCatalog::standard());
        let overlay: CardOwnership = [(CardId::new("p_ob"), Some(PlayerId::new("b")))]
            .into_iter()
            .collect();

        let merged = base.merged_with(&overlay);

        assert_eq!(merged.len(), 18);
        assert_eq!(merged.owner_of(&CardId::new("p_ob")), Some(&PlayerId::new("b")));
    }

    #[test]
    fn test_covers_exactly_rejects_extra_keys() {
        let catalog = CardCatalog::standard();
        let mut ownership = CardOwnership::unassigned(&catalog);
        ownership.set(CardId::new("x_unknown"), None);

        assert!(!ownership.covers_exactly(&catalog));
        assert!(!CardOwnership::new().covers_exactly(&catalog));
    }

    #[test]
    fn test_cards_of() {
        let mut ownership = CardOwnership::unassigned(&CardCatalog::standard());
        let a = PlayerId::new("a");
        ownership.set(CardId::new("p_ob"), Some(a.clone()));
        ownership.set(CardId::new("r_1putt"), Some(a.clone()));

        let held: Vec<_> = ownership.cards_of(&a).map(CardId::as_str).collect();
        assert_eq!(held, vec!["p_ob", "r_1putt"]);
    }

    #[test]
    fn test_json_shape() {
        let ownership: CardOwnership = [
            (CardId::new("p_ob"), Some(PlayerId::new("a"))),
            (CardId::new("p_pond"), None),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&ownership).unwrap();
        assert_eq!(json, r#"{"p_ob":"a","p_pond":null}"#);

        let back: CardOwnership = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ownership);
    }
}
