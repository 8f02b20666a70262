//! Storage slots for persisted snapshots.
//!
//! The engine does not care where snapshots live. A `SnapshotStore` is a
//! keyed text store; the host picks one and hands it to `Autosave` and
//! `load_state`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{error, warn};

use super::error::PersistError;
use super::sanitize::sanitize_snapshot;
use crate::core::GameState;

/// Keyed text storage.
pub trait SnapshotStore {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn load(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Overwrite a slot.
    fn save(&self, key: &str, contents: &str) -> Result<(), PersistError>;
}

/// In-process store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        let slots = self.slots.lock().map_err(|_| PersistError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, contents: &str) -> Result<(), PersistError> {
        let mut slots = self.slots.lock().map_err(|_| PersistError::Poisoned)?;
        slots.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for slot files. The directory is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, contents: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        // A slot file holds either the old or the new snapshot, never a partial one.
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Load the state stored under `key`, never failing.
///
/// An empty slot, an unreadable store or unparseable JSON yields a fresh
/// setup state. Parseable JSON is sanitized field by field.
pub fn load_state<S: SnapshotStore + ?Sized>(store: &S, key: &str) -> GameState {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return GameState::new(),
        Err(e) => {
            error!(key, "failed to read saved game: {e}");
            return GameState::new();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => sanitize_snapshot(&object),
        Ok(_) => {
            warn!(key, "saved game is not an object, starting fresh");
            GameState::new()
        }
        Err(e) => {
            error!(key, "failed to load state: {e}");
            GameState::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, Player};
    use crate::persist::export_json;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();

        assert_eq!(store.load("slot").unwrap(), None);
        store.save("slot", "{}").unwrap();
        assert_eq!(store.load("slot").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("saves"));

        assert_eq!(store.load("golf_card_game_v1").unwrap(), None);
        store.save("golf_card_game_v1", "{\"a\":1}").unwrap();
        assert_eq!(store.load("golf_card_game_v1").unwrap().as_deref(), Some("{\"a\":1}"));
        assert!(store.slot_path("golf_card_game_v1").ends_with("golf_card_game_v1.json"));
    }

    #[test]
    fn test_file_store_sanitizes_key() {
        let store = FileStore::new("/tmp/saves");
        assert!(store.slot_path("../evil").ends_with("___evil.json"));
    }

    #[test]
    fn test_load_state_empty_slot() {
        assert_eq!(load_state(&MemoryStore::new(), "slot"), GameState::new());
    }

    #[test]
    fn test_load_state_garbage() {
        let store = MemoryStore::new();
        store.save("slot", "{{{not json").unwrap();
        assert_eq!(load_state(&store, "slot"), GameState::new());

        store.save("slot", "42").unwrap();
        assert_eq!(load_state(&store, "slot"), GameState::new());
    }

    #[test]
    fn test_load_state_sanitizes() {
        let store = MemoryStore::new();
        store
            .save("slot", r#"{"players":[{"id":"a","name":"Aki"}],"currentHole":"x"}"#)
            .unwrap();

        let state = load_state(&store, "slot");
        assert_eq!(state.player_count(), 1);
        assert_eq!(state.current_hole, 1);
        assert_eq!(state.status, GameStatus::Setup);
    }

    #[test]
    fn test_load_state_round_trip() {
        let mut state = GameState::new();
        state.players.push_back(Player::with_id("a", "Aki"));
        let store = MemoryStore::new();
        store.save("slot", &export_json(&state).unwrap()).unwrap();

        assert_eq!(load_state(&store, "slot"), state);
    }
}
