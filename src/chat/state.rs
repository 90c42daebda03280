//! Root snapshot and its transformations
//!
//! Every transformation borrows the current snapshot and returns a new one;
//! nothing here touches storage. Persisting the result is the caller's step
//! (see [`Workspace`](crate::Workspace)).

use crate::{
    chat::{group::ChatGroup, palette::random_color, user::User},
    Error, Result,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole workspace snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    /// Users of each group, keyed by group id
    #[serde(default)]
    pub users: BTreeMap<String, Vec<User>>,
    /// Groups in display order
    pub groups: Vec<ChatGroup>,
    /// Selected group id
    pub current_group: Option<String>,
    /// Selected user id
    pub current_user: Option<String>,
}

impl ChatState {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group and give it an empty user list
    pub fn add_group(&self, group: ChatGroup) -> Self {
        let mut next = self.clone();
        next.users.insert(group.id.clone(), Vec::new());
        next.groups.push(group);
        next
    }

    /// Replace the group with the same id, keeping its position
    ///
    /// Unknown ids leave the snapshot unchanged.
    pub fn update_group(&self, updated: ChatGroup) -> Self {
        let mut next = self.clone();
        for group in next.groups.iter_mut().filter(|g| g.id == updated.id) {
            *group = updated.clone();
        }
        next
    }

    /// Remove a group and its users, clearing the selection if it pointed there
    pub fn delete_group(&self, group_id: &str) -> Self {
        let mut next = self.clone();
        next.groups.retain(|g| g.id != group_id);
        next.users.remove(group_id);
        if next.current_group.as_deref() == Some(group_id) {
            next.current_group = None;
        }
        next
    }

    /// Append a user to a group with a random palette color
    ///
    /// If the group has no user list the snapshot is returned unchanged.
    pub fn add_user<R: Rng + ?Sized>(&self, group_id: &str, user: User, rng: &mut R) -> Self {
        let mut next = self.clone();
        match next.users.get_mut(group_id) {
            Some(users) => {
                let user = User {
                    message_color: Some(random_color(rng).to_string()),
                    ..user
                };
                users.push(user);
            }
            None => {
                tracing::warn!("Ignoring new user {} for unknown group {}", user.id, group_id);
            }
        }
        next
    }

    /// Replace the user with the same id inside a group
    ///
    /// # Errors
    /// `GroupNotFound` if the group has no user list
    pub fn update_user(&self, group_id: &str, updated: User) -> Result<Self> {
        let mut next = self.clone();
        let users = next
            .users
            .get_mut(group_id)
            .ok_or_else(|| Error::GroupNotFound(group_id.to_string()))?;
        for user in users.iter_mut().filter(|u| u.id == updated.id) {
            *user = updated.clone();
        }
        Ok(next)
    }

    /// Remove a user from a group
    ///
    /// # Errors
    /// `GroupNotFound` if the group has no user list
    pub fn delete_user(&self, group_id: &str, user_id: &str) -> Result<Self> {
        let mut next = self.clone();
        next.users
            .get_mut(group_id)
            .ok_or_else(|| Error::GroupNotFound(group_id.to_string()))?
            .retain(|u| u.id != user_id);
        Ok(next)
    }

    /// Replace the group list with a reordering of itself
    ///
    /// # Errors
    /// `InvalidGroupOrder` unless `ordered` holds exactly the current group ids
    pub fn reorder_groups(&self, ordered: Vec<ChatGroup>) -> Result<Self> {
        let mut current: Vec<&str> = self.groups.iter().map(|g| g.id.as_str()).collect();
        let mut proposed: Vec<&str> = ordered.iter().map(|g| g.id.as_str()).collect();
        current.sort_unstable();
        proposed.sort_unstable();
        if current != proposed {
            return Err(Error::InvalidGroupOrder(format!(
                "expected {} groups {:?}, got {:?}",
                current.len(),
                current,
                proposed
            )));
        }

        let mut next = self.clone();
        next.groups = ordered;
        Ok(next)
    }

    /// Move the group at `from` to index `to`
    ///
    /// # Errors
    /// `InvalidGroupOrder` if either index is out of range
    pub fn move_group(&self, from: usize, to: usize) -> Result<Self> {
        let len = self.groups.len();
        if from >= len || to >= len {
            return Err(Error::InvalidGroupOrder(format!(
                "cannot move {} to {} in {} groups",
                from, to, len
            )));
        }
        let mut ordered = self.groups.clone();
        let moved = ordered.remove(from);
        ordered.insert(to, moved);
        self.reorder_groups(ordered)
    }

    /// Select a group (not validated)
    pub fn select_group(&self, group_id: impl Into<String>) -> Self {
        Self {
            current_group: Some(group_id.into()),
            ..self.clone()
        }
    }

    /// Select a user (not validated)
    pub fn select_user(&self, user_id: impl Into<String>) -> Self {
        Self {
            current_user: Some(user_id.into()),
            ..self.clone()
        }
    }

    /// Look up a group by id
    pub fn group(&self, group_id: &str) -> Option<&ChatGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Users of a group, if it has a user list
    pub fn users(&self, group_id: &str) -> Option<&[User]> {
        self.users.get(group_id).map(Vec::as_slice)
    }

    /// Selected group, or `None` if nothing is selected or the id is stale
    pub fn current_group(&self) -> Option<&ChatGroup> {
        self.current_group.as_deref().and_then(|id| self.group(id))
    }

    /// Users of the selected group; empty when nothing valid is selected
    pub fn current_group_users(&self) -> &[User] {
        self.current_group
            .as_deref()
            .and_then(|id| self.users(id))
            .unwrap_or(&[])
    }

    /// Selected user, looked up among the selected group's users
    pub fn current_user(&self) -> Option<&User> {
        let user_id = self.current_user.as_deref()?;
        self.current_group_users().iter().find(|u| u.id == user_id)
    }
}
