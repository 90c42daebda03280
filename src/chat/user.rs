//! Group members

use crate::chat::{new_id, palette::DEFAULT_MESSAGE_COLOR};
use serde::{Deserialize, Serialize};

/// A member of exactly one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Id, unique within the owning group's list
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar URL or embedded data URI
    pub avatar: String,
    /// Bubble color as a hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_color: Option<String>,
}

impl User {
    /// Create a user with a fresh timestamp id and the default bubble color
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            avatar: avatar.into(),
            message_color: Some(DEFAULT_MESSAGE_COLOR.to_string()),
        }
    }

    /// Color used to render this user's messages
    pub fn effective_color(&self) -> &str {
        self.message_color.as_deref().unwrap_or(DEFAULT_MESSAGE_COLOR)
    }

    /// Copy with a new display name
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

    /// Copy with a new bubble color
    pub fn with_color(&self, color: impl Into<String>) -> Self {
        Self {
            message_color: Some(color.into()),
            ..self.clone()
        }
    }
}
