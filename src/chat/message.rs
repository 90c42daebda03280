//! Message structures

use crate::chat::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// What a message's `content` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text
    Text,
    /// Image as an embedded data URI
    Image,
}

/// Represents a stored message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message ID, unique within its group's log
    pub id: String,
    /// Sender, a user of the owning group
    pub user_id: String,
    /// Text or image data URI
    pub content: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    /// Content kind
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

impl Message {
    /// Create a message with an explicit id and timestamp
    pub fn new(
        id: String,
        user_id: String,
        content: String,
        timestamp: i64,
        kind: MessageKind,
    ) -> Self {
        Self {
            id,
            user_id,
            content,
            timestamp,
            kind,
        }
    }

    /// Text message stamped now
    ///
    /// Content is trimmed. Returns `None` when nothing is left.
    pub fn text(user_id: impl Into<String>, content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self::new(
            new_id(),
            user_id.into(),
            content.to_string(),
            now_millis(),
            MessageKind::Text,
        ))
    }

    /// Image message stamped now
    pub fn image(user_id: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self::new(
            new_id(),
            user_id.into(),
            data_uri.into(),
            now_millis(),
            MessageKind::Image,
        )
    }

    /// Whether this message carries an image
    pub fn is_image(&self) -> bool {
        self.kind == MessageKind::Image
    }
}
