//! Snapshot persistence
//!
//! The whole `ChatState` lives in one slot and is overwritten on every save.

use crate::{
    chat::ChatState,
    storage::{
        backend::KeyValueStore,
        codec::{read_value, write_value, Codec},
        keys::CHAT_STATE_KEY,
    },
    Result,
};

impl ChatState {
    /// Save the snapshot, replacing whatever the slot held
    ///
    /// # Errors
    /// Returns an error if encoding or the backend write fails
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, codec: Codec) -> Result<()> {
        write_value(store, codec, CHAT_STATE_KEY, self)
    }

    /// Load the snapshot
    ///
    /// # Returns
    /// The stored snapshot, or an empty one if nothing was saved yet. A stored
    /// record without `users` gets an empty map.
    ///
    /// # Errors
    /// Returns an error if the stored value is malformed
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, codec: Codec) -> Result<Self> {
        let state = read_value(store, codec, CHAT_STATE_KEY)?.unwrap_or_default();
        Ok(state)
    }
}
