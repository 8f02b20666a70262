//! Lenient snapshot loading.
//!
//! Snapshots come from local storage or user-supplied backup files and may
//! be truncated, hand-edited or written by an older build. Loading never
//! refuses: each top-level field is recovered independently and replaced by
//! a safe default when it is missing or malformed.
//!
//! | field         | default  |
//! |---------------|----------|
//! | `players`     | `[]`     |
//! | `ownership`   | `{}`     |
//! | `currentHole` | `1`      |
//! | `history`     | `[]`     |
//! | `status`      | `SETUP`  |
//!
//! History entries get the same treatment one level down: each entry's
//! fields are recovered on their own instead of dropping the whole hole.
//!
//! This module is the only place that policy lives; the transitions never
//! see unsanitized input.

use serde_json::{Map, Value};
use tracing::warn;

use crate::cards::CardId;
use crate::core::{
    CardOwnership, GameState, GameStatus, HistoryEntry, Move, MoveBatch, Player, PlayerId,
};

/// Build a `GameState` from an arbitrary JSON object, field by field.
#[must_use]
pub fn sanitize_snapshot(object: &Map<String, Value>) -> GameState {
    GameState {
        players: players(object.get("players")),
        ownership: ownership(object.get("ownership")),
        current_hole: current_hole(object.get("currentHole")),
        history: history(object.get("history")),
        status: status(object.get("status")),
    }
}

/// JavaScript-style truthiness, used for the import presence gate.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn players(value: Option<&Value>) -> im::Vector<Player> {
    let Some(Value::Array(items)) = value else {
        return im::Vector::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Player>(item.clone()) {
            Ok(player) => Some(player),
            Err(e) => {
                warn!("skipping malformed player entry: {e}");
                None
            }
        })
        .collect()
}

fn ownership(value: Option<&Value>) -> CardOwnership {
    let Some(Value::Object(entries)) = value else {
        return CardOwnership::new();
    };

    entries
        .iter()
        .map(|(card, owner)| {
            let owner = match owner {
                Value::String(id) => Some(PlayerId::new(id.as_str())),
                _ => None,
            };
            (CardId::new(card.as_str()), owner)
        })
        .collect()
}

/// Recover the hole counter.
///
/// Accepts numbers and numeric strings (leading integer prefix, as
/// `parseInt` would read it). Zero, negative, unreadable or out-of-range
/// values become 1.
fn current_hole(value: Option<&Value>) -> u32 {
    hole_number(value).unwrap_or(1)
}

/// A hole number in `1..u32::MAX`, so the counter can always advance once more.
fn hole_number(value: Option<&Value>) -> Option<u32> {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => leading_integer(s),
        _ => None,
    }?;

    u32::try_from(parsed)
        .ok()
        .filter(|hole| (1..u32::MAX).contains(hole))
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn history(value: Option<&Value>) -> im::Vector<HistoryEntry> {
    let Some(Value::Array(items)) = value else {
        return im::Vector::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| match item {
            Value::Object(fields) => Some(history_entry(position, fields)),
            other => {
                warn!(position, "skipping history entry that is not an object: {other}");
                None
            }
        })
        .collect()
}

/// Recover one history entry field by field.
///
/// An unreadable `holeNumber` falls back to the entry's 1-based position,
/// a missing `timestamp` to `""`. Malformed moves are skipped and the
/// snapshot gets the same owner coercion as the top-level `ownership`.
fn history_entry(position: usize, fields: &Map<String, Value>) -> HistoryEntry {
    let hole_number = hole_number(fields.get("holeNumber"))
        .or_else(|| u32::try_from(position + 1).ok())
        .unwrap_or(1);

    let timestamp = match fields.get("timestamp") {
        Some(Value::String(ts)) => ts.clone(),
        _ => String::new(),
    };

    let moves: MoveBatch = match fields.get("moves") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match serde_json::from_value::<Move>(item.clone()) {
                Ok(m) => Some(m),
                Err(e) => {
                    warn!(hole = hole_number, "skipping malformed move: {e}");
                    None
                }
            })
            .collect(),
        _ => MoveBatch::new(),
    };

    HistoryEntry {
        hole_number,
        timestamp,
        moves,
        ownership_snapshot: ownership(fields.get("ownershipSnapshot")),
    }
}

fn status(value: Option<&Value>) -> GameStatus {
    match value {
        Some(v) => serde_json::from_value(v.clone()).unwrap_or_default(),
        None => GameStatus::default(),
    }
}
