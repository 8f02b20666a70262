//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the fixed, ordered list of card definitions
//! for a game. It provides fast lookup by `CardId` and iterates in catalog
//! order, which is also the display order.

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};

/// Ordered, immutable set of card definitions.
///
/// ## Example
///
/// ```
/// use golf_cards::cards::{CardCatalog, CardDefinition, CardId};
///
/// let catalog = CardCatalog::new(vec![
///     CardDefinition::penalty("p_ob", "OB"),
///     CardDefinition::reward("r_1putt", "1パット"),
/// ]);
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(&CardId::new("p_ob")).unwrap().name, "OB");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

static STANDARD: LazyLock<Arc<CardCatalog>> = LazyLock::new(|| Arc::new(standard_catalog()));

impl CardCatalog {
    /// Build a catalog from definitions in display order.
    ///
    /// Panics if two definitions share an ID.
    #[must_use]
    pub fn new(cards: Vec<CardDefinition>) -> Self {
        let mut index = FxHashMap::default();
        for (position, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), position).is_some() {
                panic!("Card with ID {} already registered", card.id);
            }
        }
        Self { cards, index }
    }

    /// The process-wide standard catalog (14 penalty + 4 reward cards).
    #[must_use]
    pub fn standard() -> Arc<CardCatalog> {
        Arc::clone(&STANDARD)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Iterate over all card IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|c| &c.id)
    }

    /// Find cards of one kind, in catalog order.
    pub fn by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.kind == kind)
    }

    pub fn penalties(&self) -> impl Iterator<Item = &CardDefinition> {
        self.by_kind(CardKind::Penalty)
    }

    pub fn rewards(&self) -> impl Iterator<Item = &CardDefinition> {
        self.by_kind(CardKind::Reward)
    }
}

fn standard_catalog() -> CardCatalog {
    CardCatalog::new(vec![
        CardDefinition::penalty("p_pond", "池").with_description("レッドゾーン含む"),
        CardDefinition::penalty("p_bunker", "砂").with_description("バンカー"),
        CardDefinition::penalty("p_btob", "BtoB").with_description("バンカーからバンカー"),
        CardDefinition::penalty("p_duff", "ダフリ"),
        CardDefinition::penalty("p_collar", "カラー"),
        CardDefinition::penalty("p_ob", "OB"),
        CardDefinition::penalty("p_lumberjack", "木こり").with_description("木に当てる"),
        CardDefinition::penalty("p_under_tree", "木の下"),
        CardDefinition::penalty("p_3putt", "3パット"),
        CardDefinition::penalty("p_4putt", "4パット"),
        CardDefinition::penalty("p_repair", "修理地"),
        CardDefinition::penalty("p_edge", "ふちこ").with_description("カップの縁"),
        CardDefinition::penalty("p_lick", "なめこ").with_description("カップを舐める"),
        CardDefinition::penalty("p_next_hole", "隣のホール"),
        CardDefinition::reward("r_1putt", "1パット"),
        CardDefinition::reward("r_only_one", "オンリーワン").with_description("ショートで一人だけON"),
        CardDefinition::reward("r_going_my_way", "ゴーイングマイウェイ").with_description("一人だけFW"),
        CardDefinition::reward("r_chip_in", "チップイン"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.penalties().count(), 14);
        assert_eq!(catalog.rewards().count(), 4);
    }

    #[test]
    fn test_standard_catalog_is_shared() {
        let a = CardCatalog::standard();
        let b = CardCatalog::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = CardCatalog::standard();
        let ids: Vec<_> = catalog.ids().map(CardId::as_str).collect();

        assert_eq!(ids.first(), Some(&"p_pond"));
        assert_eq!(ids.last(), Some(&"r_chip_in"));
        // Penalties come before rewards
        let first_reward = ids.iter().position(|id| id.starts_with("r_")).unwrap();
        assert_eq!(first_reward, 14);
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = CardCatalog::standard();

        let pond = catalog.get(&CardId::new("p_pond")).unwrap();
        assert_eq!(pond.name, "池");
        assert!(pond.is_penalty());

        assert!(catalog.contains(&CardId::new("r_only_one")));
        assert!(!catalog.contains(&CardId::new("p_missing")));
        assert!(catalog.get(&CardId::new("p_missing")).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        CardCatalog::new(vec![
            CardDefinition::penalty("p_ob", "OB"),
            CardDefinition::reward("p_ob", "Also OB"),
        ]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CardCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
