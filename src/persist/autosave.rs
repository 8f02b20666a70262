//! Autosave observer.
//!
//! Attached to a `GameEngine`, writes the JSON snapshot to a storage slot
//! after every accepted transition. Failures are logged and otherwise
//! ignored; a transition never fails because the disk did.

use std::sync::Arc;

use tracing::{trace, warn};

use super::snapshot::export_json;
use super::store::SnapshotStore;
use crate::core::GameState;
use crate::engine::StateObserver;

pub struct Autosave<S: SnapshotStore> {
    store: Arc<S>,
    key: String,
}

impl<S: SnapshotStore> Autosave<S> {
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: SnapshotStore> StateObserver for Autosave<S> {
    fn on_transition(&mut self, state: &GameState) {
        let result = export_json(state).and_then(|json| self.store.save(&self.key, &json));
        match result {
            Ok(()) => trace!(key = %self.key, "state saved"),
            Err(e) => warn!(key = %self.key, "failed to save state: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::persist::{load_state, MemoryStore};

    #[test]
    fn test_writes_snapshot_to_slot() {
        let store = Arc::new(MemoryStore::new());
        let mut autosave = Autosave::new(Arc::clone(&store), "slot");

        let mut state = GameState::new();
        state.players.push_back(Player::with_id("a", "Aki"));
        autosave.on_transition(&state);

        assert_eq!(autosave.key(), "slot");
        assert_eq!(load_state(store.as_ref(), "slot"), state);
    }
}
