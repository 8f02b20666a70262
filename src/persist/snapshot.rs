//! Snapshot import and export.
//!
//! The JSON document is isomorphic to `GameState` and is what both the
//! storage slot and user backups contain. Import applies a presence gate
//! (`players`, `ownership` and `status` must be present and truthy) and then
//! the field-by-field sanitizer; nothing deeper is validated.
//!
//! Binary snapshots (`bincode`) are strict: they round-trip exactly or fail.

use chrono::NaiveDate;
use serde_json::Value;

use super::error::{ImportError, PersistError};
use super::sanitize::{is_truthy, sanitize_snapshot};
use crate::core::GameState;

/// Fields an import payload must carry.
const REQUIRED_FIELDS: [&str; 3] = ["players", "ownership", "status"];

/// Serialize a state to the snapshot document.
pub fn export_json(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

/// Pretty-printed variant for files meant to be read by people.
pub fn export_json_pretty(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parse a user-supplied snapshot.
///
/// ```
/// use golf_cards::persist::{import_json, ImportError};
///
/// assert!(matches!(import_json(r#"{"foo":1}"#), Err(ImportError::MissingField("players"))));
/// ```
pub fn import_json(raw: &str) -> Result<GameState, ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(object) = value else {
        return Err(ImportError::NotAnObject);
    };

    for field in REQUIRED_FIELDS {
        if !object.get(field).is_some_and(is_truthy) {
            return Err(ImportError::MissingField(field));
        }
    }

    Ok(sanitize_snapshot(&object))
}

/// Compact binary encoding.
pub fn encode_binary(state: &GameState) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a binary snapshot produced by `encode_binary`.
pub fn decode_binary(bytes: &[u8]) -> Result<GameState, PersistError> {
    Ok(bincode::deserialize(bytes)?)
}

/// File name for a downloadable backup, e.g. `golf-backup-2026-10-16.json`.
#[must_use]
pub fn backup_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}
