//! Persistence: snapshot documents, lenient loading and storage slots.
//!
//! ## Key Types
//!
//! - `import_json` / `export_json`: the JSON snapshot document
//! - `sanitize_snapshot`: field-by-field recovery of damaged snapshots
//! - `SnapshotStore`: keyed storage (`MemoryStore`, `FileStore`)
//! - `Autosave`: engine observer that writes after every transition
//!
//! All I/O lives here. The engine's transitions stay pure; the host wires a
//! store in through `Autosave` and `load_state`.

pub mod autosave;
pub mod error;
pub mod sanitize;
pub mod snapshot;
pub mod store;

pub use autosave::Autosave;
pub use error::{ImportError, PersistError};
pub use sanitize::{is_truthy, sanitize_snapshot};
pub use snapshot::{
    backup_file_name, decode_binary, encode_binary, export_json, export_json_pretty, import_json,
};
pub use store::{load_state, FileStore, MemoryStore, SnapshotStore};
