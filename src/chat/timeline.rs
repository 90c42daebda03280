//! Date-bucketed view of a message list

use crate::chat::message::Message;
use chrono::{Local, NaiveDate, TimeZone};

/// Label used for timestamps outside the representable range
const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Messages sharing one calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBucket<'a> {
    /// Short date label, `M/D/YYYY`
    pub label: String,
    /// Calendar date, `None` for unrepresentable timestamps
    pub date: Option<NaiveDate>,
    /// Messages in source order
    pub messages: Vec<&'a Message>,
}

/// Group messages by local calendar date
///
/// Buckets appear in the order their date first occurs in `messages`; they
/// are not sorted chronologically.
pub fn group_by_date(messages: &[Message]) -> Vec<DateBucket<'_>> {
    group_by_date_in(messages, &Local)
}

/// [`group_by_date`] in an explicit time zone
pub fn group_by_date_in<'a, Tz: TimeZone>(messages: &'a [Message], tz: &Tz) -> Vec<DateBucket<'a>> {
    let mut buckets: Vec<DateBucket<'a>> = Vec::new();

    for message in messages {
        let date = tz
            .timestamp_millis_opt(message.timestamp)
            .single()
            .map(|dt| dt.date_naive());
        let label = match date {
            Some(d) => d.format("%-m/%-d/%Y").to_string(),
            None => INVALID_DATE_LABEL.to_string(),
        };

        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.messages.push(message),
            None => buckets.push(DateBucket {
                label,
                date,
                messages: vec![message],
            }),
        }
    }

    buckets
}
