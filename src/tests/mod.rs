// Test modules for Chatroom
// Each module covers one area of the library:
// - chat_state_tests: pure snapshot transformations and read views
// - persistence_tests: snapshot save/load across backends and codecs
// - message_log_tests: per-group logs and the date-bucketed projection
// - workspace_tests: the persisting facade
// - productivity_tests: tasks, weekly schedule, countdown timer
// - settings_tests: settings file handling and backend selection

mod message_log_tests;
mod settings_tests;

use crate::chat::{ChatGroup, Message, MessageKind, User};

/// Group with a fixed id
pub(crate) fn group(id: &str, name: &str) -> ChatGroup {
    ChatGroup {
        id: id.to_string(),
        name: name.to_string(),
        members: Vec::new(),
        avatar: format!("https://example.test/{}.svg", id),
    }
}

/// User with a fixed id and no color
pub(crate) fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://example.test/u{}.svg", id),
        message_color: None,
    }
}

/// Text message with a fixed id and timestamp
pub(crate) fn text_message(id: &str, user_id: &str, content: &str, timestamp: i64) -> Message {
    Message::new(
        id.to_string(),
        user_id.to_string(),
        content.to_string(),
        timestamp,
        MessageKind::Text,
    )
}
