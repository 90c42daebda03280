//! Workspace: snapshot, message logs and widgets over one backend
//!
//! Each state operation runs the pure transformation on the current
//! snapshot, persists the result, and only then adopts it. A failed write
//! leaves the in-memory snapshot as it was.
//!
//! Several workspaces over the same storage medium do not see each other's
//! writes and overwrite each other wholesale (last write wins).

use crate::{
    chat::{ChatGroup, ChatState, Message, User},
    productivity::{TaskBoard, WeeklySchedule},
    storage::{Codec, KeyValueStore, MessageLog, Settings},
    Result,
};
use rand::Rng;

/// Persistent workspace bound to a backend
pub struct Workspace<S: KeyValueStore> {
    store: S,
    codec: Codec,
    state: ChatState,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Open a workspace, loading the stored snapshot or starting empty
    ///
    /// # Errors
    /// Returns an error if the stored snapshot is malformed
    pub fn open(store: S, codec: Codec) -> Result<Self> {
        let state = ChatState::load(&store, codec)?;
        tracing::info!("Opened workspace with {} groups", state.groups.len());
        Ok(Self { store, codec, state })
    }

    /// Current snapshot
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Codec used for every stored value
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Backend
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the backend back
    pub fn into_store(self) -> S {
        self.store
    }

    /// Re-read the snapshot from the backend, dropping the in-memory one
    pub fn reload(&mut self) -> Result<()> {
        self.state = ChatState::load(&self.store, self.codec)?;
        Ok(())
    }

    /// Persist `next` and adopt it as the current snapshot
    pub fn commit(&mut self, next: ChatState) -> Result<&ChatState> {
        next.save(&mut self.store, self.codec)?;
        self.state = next;
        Ok(&self.state)
    }

    /// Run a transformation on the current snapshot and commit the result
    pub fn apply<F>(&mut self, transform: F) -> Result<&ChatState>
    where
        F: FnOnce(&ChatState) -> Result<ChatState>,
    {
        let next = transform(&self.state)?;
        self.commit(next)
    }

    /// Append a group
    pub fn add_group(&mut self, group: ChatGroup) -> Result<&ChatState> {
        self.apply(|s| Ok(s.add_group(group)))
    }

    /// Replace a group in place
    pub fn update_group(&mut self, group: ChatGroup) -> Result<&ChatState> {
        self.apply(|s| Ok(s.update_group(group)))
    }

    /// Remove a group and its users
    ///
    /// The group's message log is left in storage; see [`MessageLog::clear`].
    pub fn delete_group(&mut self, group_id: &str) -> Result<&ChatState> {
        self.apply(|s| Ok(s.delete_group(group_id)))
    }

    /// Add a user with a color drawn from the thread-local RNG
    pub fn add_user(&mut self, group_id: &str, user: User) -> Result<&ChatState> {
        self.add_user_with_rng(group_id, user, &mut rand::thread_rng())
    }

    /// Add a user with a color drawn from `rng`
    pub fn add_user_with_rng<R: Rng + ?Sized>(
        &mut self,
        group_id: &str,
        user: User,
        rng: &mut R,
    ) -> Result<&ChatState> {
        self.apply(|s| Ok(s.add_user(group_id, user, rng)))
    }

    /// Replace a user of a group
    pub fn update_user(&mut self, group_id: &str, user: User) -> Result<&ChatState> {
        self.apply(|s| s.update_user(group_id, user))
    }

    /// Remove a user from a group
    pub fn delete_user(&mut self, group_id: &str, user_id: &str) -> Result<&ChatState> {
        self.apply(|s| s.delete_user(group_id, user_id))
    }

    /// Replace the group order
    pub fn reorder_groups(&mut self, ordered: Vec<ChatGroup>) -> Result<&ChatState> {
        self.apply(|s| s.reorder_groups(ordered))
    }

    /// Move one group to a new position
    pub fn move_group(&mut self, from: usize, to: usize) -> Result<&ChatState> {
        self.apply(|s| s.move_group(from, to))
    }

    /// Select a group
    pub fn select_group(&mut self, group_id: &str) -> Result<&ChatState> {
        self.apply(|s| Ok(s.select_group(group_id)))
    }

    /// Select a user
    pub fn select_user(&mut self, user_id: &str) -> Result<&ChatState> {
        self.apply(|s| Ok(s.select_user(user_id)))
    }

    /// Message logs on this workspace's backend
    pub fn messages(&mut self) -> MessageLog<'_, S> {
        MessageLog::new(&mut self.store, self.codec)
    }

    /// Post a text message as the selected user into the selected group
    ///
    /// Returns `Ok(None)` without writing when the text is blank or no valid
    /// group and user are selected.
    pub fn post_text(&mut self, content: &str) -> Result<Option<Message>> {
        let Some((group_id, user_id)) = self.selection() else {
            return Ok(None);
        };
        match Message::text(user_id, content) {
            Some(message) => self.append_message(&group_id, message),
            None => Ok(None),
        }
    }

    /// Post an image (data URI) as the selected user into the selected group
    pub fn post_image(&mut self, data_uri: &str) -> Result<Option<Message>> {
        let Some((group_id, user_id)) = self.selection() else {
            return Ok(None);
        };
        self.append_message(&group_id, Message::image(user_id, data_uri))
    }

    fn selection(&self) -> Option<(String, String)> {
        match (self.state.current_group(), self.state.current_user()) {
            (Some(group), Some(user)) => Some((group.id.clone(), user.id.clone())),
            _ => {
                tracing::debug!("Nothing posted: no group/user selected");
                None
            }
        }
    }

    fn append_message(&mut self, group_id: &str, message: Message) -> Result<Option<Message>> {
        self.messages().append(group_id, message.clone())?;
        Ok(Some(message))
    }

    /// Load the task board
    pub fn tasks(&self) -> Result<TaskBoard> {
        TaskBoard::load(&self.store, self.codec)
    }

    /// Store the task board
    pub fn save_tasks(&mut self, board: &TaskBoard) -> Result<()> {
        board.save(&mut self.store, self.codec)
    }

    /// Load the weekly schedule
    pub fn schedule(&self) -> Result<WeeklySchedule> {
        WeeklySchedule::load(&self.store, self.codec)
    }

    /// Store the weekly schedule
    pub fn save_schedule(&mut self, schedule: &WeeklySchedule) -> Result<()> {
        schedule.save(&mut self.store, self.codec)
    }
}

impl Workspace<Box<dyn KeyValueStore>> {
    /// Open the backend and codec named by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let store = settings.open_backend()?;
        Self::open(store, settings.codec)
    }
}
