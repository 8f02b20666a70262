//! Card system: definitions and the fixed catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable string identifier (`p_pond`, `r_chip_in`, ...)
//! - `CardKind`: Penalty or reward
//! - `CardDefinition`: Static card data
//! - `CardCatalog`: Ordered, immutable definition lookup
//!
//! Cards are never instantiated per game. A card is either held by one
//! player or unassigned, and that is tracked by `GameState::ownership`.

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardKind};
