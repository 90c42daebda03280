//! Storage key conventions

/// Slot holding the whole `ChatState` snapshot
pub const CHAT_STATE_KEY: &str = "chatRoomState";

/// Prefix of the per-group message log keys
pub const MESSAGES_KEY_PREFIX: &str = "messages_";

/// Slot holding the daily task list
pub const DAILY_TASKS_KEY: &str = "dailyTasks";

/// Slot holding the weekly targets
pub const WEEKLY_TARGETS_KEY: &str = "weeklyTargets";

/// Slot holding the weekly schedule
pub const WEEKLY_SCHEDULE_KEY: &str = "weeklySchedule";

/// Group-scoped key of a group's message log
pub fn messages_key(group_id: &str) -> String {
    format!("{}{}", MESSAGES_KEY_PREFIX, group_id)
}

/// Group id encoded in a message log key, if `key` is one
pub fn group_id_from_messages_key(key: &str) -> Option<&str> {
    key.strip_prefix(MESSAGES_KEY_PREFIX)
}
