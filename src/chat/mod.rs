//! Chat domain model
//!
//! This module holds the entities of the workspace and the pure
//! transformations over the root snapshot:
//! - `user` - members scoped to a single group
//! - `group` - chat groups in their user-controlled order
//! - `message` - text and image messages
//! - `palette` - message colors assigned to new users
//! - `state` - the `ChatState` snapshot and its transformations
//! - `timeline` - date-bucketed projection of a message list

pub mod group;
pub mod message;
pub mod palette;
pub mod state;
pub mod timeline;
pub mod user;

pub use group::ChatGroup;
pub use message::{Message, MessageKind};
pub use palette::{random_color, DEFAULT_MESSAGE_COLOR, PALETTE};
pub use state::ChatState;
pub use timeline::{group_by_date, group_by_date_in, DateBucket};
pub use user::User;

use std::sync::atomic::{AtomicI64, Ordering};

/// Avatar template for users, seeded with the user's id
pub const DEFAULT_USER_AVATAR_TEMPLATE: &str = "https://api.dicebear.com/6.x/avataaars/svg?seed={seed}";

/// Avatar template for groups, seeded with the group's name
pub const DEFAULT_GROUP_AVATAR_TEMPLATE: &str = "https://api.dicebear.com/6.x/identicon/svg?seed={seed}";

/// Last value handed out by [`new_id`]
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Fresh timestamp-derived entity id (epoch milliseconds)
///
/// Ids are strictly increasing within the process: an id minted in the same
/// millisecond as the previous one is bumped past it.
pub fn new_id() -> String {
    next_id_value(now_millis()).to_string()
}

fn next_id_value(now: i64) -> i64 {
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Substitute `seed` into an avatar URL template
pub fn avatar_url(template: &str, seed: &str) -> String {
    template.replace("{seed}", seed)
}
