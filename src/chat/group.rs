//! Chat groups

use crate::chat::new_id;
use serde::{Deserialize, Serialize};

/// A chat group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatGroup {
    /// Group id
    pub id: String,
    /// Display name
    pub name: String,
    /// Informational list of user ids; membership is held in `ChatState::users`
    #[serde(default)]
    pub members: Vec<String>,
    /// Avatar URL or embedded data URI
    pub avatar: String,
}

impl ChatGroup {
    /// Create a group with a fresh timestamp id and no listed members
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            members: Vec::new(),
            avatar: avatar.into(),
        }
    }

    /// Copy with a new name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy with a new avatar
    pub fn with_avatar(&self, avatar: impl Into<String>) -> Self {
        Self {
            avatar: avatar.into(),
            ..self.clone()
        }
    }
}
