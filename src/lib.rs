//! Chatroom - local-first persistence core for a group chat workspace
//!
//! This library holds the state model of a chat and productivity workspace:
//! groups, the users scoped to each group, per-group message logs, and the
//! small productivity widgets (tasks, weekly schedule, countdown timer).
//! Everything is persisted through a pluggable key-value backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod productivity;
pub mod storage;
pub mod workspace;

pub use workspace::Workspace;

/// Result type alias for Chatroom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chatroom operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be encoded or decoded
    #[error("Codec error: {0}")]
    Codec(String),

    /// A user mutation referenced a group that has no user list
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    /// A reorder request was not a permutation of the existing groups
    #[error("Invalid group order: {0}")]
    InvalidGroupOrder(String),

    /// Timer driver is no longer running
    #[error("Timer error: {0}")]
    Timer(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Initialize logging for the Chatroom library
///
/// Honors `RUST_LOG`, falling back to `info`. Calling it more than once is harmless.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests;
