//! Per-group message logs
//!
//! Each group's messages live under their own `messages_<groupId>` key,
//! outside the root snapshot. Every operation is a full load-modify-store
//! round trip; two writers on the same log overwrite each other.

use crate::{
    chat::Message,
    storage::{
        backend::KeyValueStore,
        codec::{read_value, write_value, Codec},
        keys::messages_key,
    },
    Result,
};

/// Message log access bound to a backend
pub struct MessageLog<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
    codec: Codec,
}

impl<'a, S: KeyValueStore + ?Sized> MessageLog<'a, S> {
    /// Bind to a backend
    pub fn new(store: &'a mut S, codec: Codec) -> Self {
        Self { store, codec }
    }

    /// Messages of a group in insertion order, empty if none were stored
    pub fn load(&self, group_id: &str) -> Result<Vec<Message>> {
        Ok(read_value(&*self.store, self.codec, &messages_key(group_id))?.unwrap_or_default())
    }

    /// Overwrite a group's whole log
    pub fn save(&mut self, group_id: &str, messages: &[Message]) -> Result<()> {
        write_value(&mut *self.store, self.codec, &messages_key(group_id), messages)
    }

    /// Append a message to the end of a group's log
    pub fn append(&mut self, group_id: &str, message: Message) -> Result<()> {
        let mut messages = self.load(group_id)?;
        messages.push(message);
        self.save(group_id, &messages)
    }

    /// Replace the message with the same id; no-op if absent
    pub fn update(&mut self, group_id: &str, updated: Message) -> Result<()> {
        let mut messages = self.load(group_id)?;
        let mut found = false;
        for message in messages.iter_mut().filter(|m| m.id == updated.id) {
            *message = updated.clone();
            found = true;
        }
        if !found {
            tracing::warn!("Message {} not found in group {}", updated.id, group_id);
        }
        self.save(group_id, &messages)
    }

    /// Remove messages with the given id
    pub fn remove(&mut self, group_id: &str, message_id: &str) -> Result<()> {
        let mut messages = self.load(group_id)?;
        messages.retain(|m| m.id != message_id);
        self.save(group_id, &messages)
    }

    /// Drop a group's log key entirely
    pub fn clear(&mut self, group_id: &str) -> Result<()> {
        tracing::debug!("Clearing message log of group {}", group_id);
        self.store.remove(&messages_key(group_id))
    }
}
