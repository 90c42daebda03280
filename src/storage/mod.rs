//! Local storage module
//!
//! This module handles persistence of the workspace:
//! - `backend` - the `KeyValueStore` trait with in-memory and file backends
//! - `storage_db` - SQLite-backed `KeyValueStore`
//! - `codec` - JSON/CBOR encoding of stored values
//! - `keys` - storage key conventions
//! - `app_state` - loading and saving the `ChatState` snapshot
//! - `message_log` - per-group message logs
//! - `settings` - workspace configuration

// Submodules
pub mod app_state;
pub mod backend;
pub mod codec;
pub mod keys;
pub mod message_log;
pub mod settings;
pub mod storage_db;

// Re-export commonly used types
pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use codec::Codec;
pub use message_log::MessageLog;
pub use settings::{BackendKind, Settings};
pub use storage_db::SqliteStore;
