//! Weekly schedule

use crate::{
    chat::new_id,
    productivity::Priority,
    storage::{
        backend::KeyValueStore,
        codec::{read_value, write_value, Codec},
        keys::WEEKLY_SCHEDULE_KEY,
    },
    Result,
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Something planned for a day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Item id
    pub id: String,
    /// Day, stored as `Mon`..`Sun`
    pub day: Weekday,
    /// What to do
    pub task: String,
    /// Priority
    pub priority: Priority,
}

/// Items of the week in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    items: Vec<ScheduleItem>,
}

impl WeeklySchedule {
    /// Days in display order
    pub const DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Load the schedule; a missing key yields an empty one
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, codec: Codec) -> Result<Self> {
        Ok(read_value(store, codec, WEEKLY_SCHEDULE_KEY)?.unwrap_or_default())
    }

    /// Overwrite the stored schedule
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, codec: Codec) -> Result<()> {
        write_value(store, codec, WEEKLY_SCHEDULE_KEY, self)
    }

    /// All items
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// Items planned for `day`, in insertion order
    pub fn items_for(&self, day: Weekday) -> impl Iterator<Item = &ScheduleItem> {
        self.items.iter().filter(move |item| item.day == day)
    }

    /// Plan a task on a day; blank tasks are rejected
    pub fn add(&mut self, day: Weekday, task: &str, priority: Priority) -> Option<&ScheduleItem> {
        if task.trim().is_empty() {
            return None;
        }
        self.items.push(ScheduleItem {
            id: new_id(),
            day,
            task: task.to_string(),
            priority,
        });
        self.items.last()
    }

    /// Remove an item
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }
}
