//! Daily tasks and weekly targets

use crate::{
    chat::new_id,
    productivity::Priority,
    storage::{
        backend::KeyValueStore,
        codec::{read_value, write_value, Codec},
        keys::{DAILY_TASKS_KEY, WEEKLY_TARGETS_KEY},
    },
    Result,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task id
    pub id: String,
    /// Title
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
    /// Priority
    pub priority: Priority,
    /// Optional due date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// A target for the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTarget {
    /// Target id
    pub id: String,
    /// Title
    pub title: String,
    /// Whether the target is reached
    pub completed: bool,
    /// Due date (`YYYY-MM-DD`)
    pub due_date: NaiveDate,
}

/// Daily tasks plus weekly targets, persisted under separate keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    /// Daily tasks in insertion order
    pub tasks: Vec<Task>,
    /// Weekly targets in insertion order
    pub weekly_targets: Vec<WeeklyTarget>,
}

impl TaskBoard {
    /// Load both lists; missing keys yield empty lists
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, codec: Codec) -> Result<Self> {
        Ok(Self {
            tasks: read_value(store, codec, DAILY_TASKS_KEY)?.unwrap_or_default(),
            weekly_targets: read_value(store, codec, WEEKLY_TARGETS_KEY)?.unwrap_or_default(),
        })
    }

    /// Overwrite both lists
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, codec: Codec) -> Result<()> {
        write_value(store, codec, DAILY_TASKS_KEY, &self.tasks)?;
        write_value(store, codec, WEEKLY_TARGETS_KEY, &self.weekly_targets)
    }

    /// Add a task; blank titles are rejected
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Option<&Task> {
        if title.trim().is_empty() {
            return None;
        }
        self.tasks.push(Task {
            id: new_id(),
            title: title.to_string(),
            completed: false,
            priority,
            due_date,
        });
        self.tasks.last()
    }

    /// Add a weekly target; blank titles are rejected
    pub fn add_weekly_target(&mut self, title: &str, due_date: NaiveDate) -> Option<&WeeklyTarget> {
        if title.trim().is_empty() {
            return None;
        }
        self.weekly_targets.push(WeeklyTarget {
            id: new_id(),
            title: title.to_string(),
            completed: false,
            due_date,
        });
        self.weekly_targets.last()
    }

    /// Flip a task's completion
    pub fn toggle_task(&mut self, id: &str) {
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Flip a weekly target's completion
    pub fn toggle_target(&mut self, id: &str) {
        for target in self.weekly_targets.iter_mut().filter(|t| t.id == id) {
            target.completed = !target.completed;
        }
    }

    /// Remove a task
    pub fn delete_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Remove a weekly target
    pub fn delete_target(&mut self, id: &str) {
        self.weekly_targets.retain(|t| t.id != id);
    }

    /// Tasks not yet completed
    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }
}
