//! Persistence and import errors.

use thiserror::Error;

/// Why an import payload was rejected. The current state is never touched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot is not a JSON object")]
    NotAnObject,

    #[error("snapshot is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Errors from storage and encoding.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("storage slot lock poisoned")]
    Poisoned,
}
