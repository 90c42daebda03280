//! Productivity widgets
//!
//! State and persistence behind the workspace's side tools:
//! - `tasks` - daily tasks and weekly targets
//! - `schedule` - items pinned to days of the week
//! - `timer` - countdown timer and its async ticking driver

pub mod schedule;
pub mod tasks;
pub mod timer;

pub use schedule::{ScheduleItem, WeeklySchedule};
pub use tasks::{Task, TaskBoard, WeeklyTarget};
pub use timer::{
    spawn_timer, Countdown, TimerCommand, TimerEvent, TimerHandle, DEFAULT_TIMER_MINUTES,
    MAX_TIMER_MINUTES,
};

use serde::{Deserialize, Serialize};

/// Priority shared by tasks and schedule items
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    #[default]
    Medium,
    /// High priority
    High,
}
