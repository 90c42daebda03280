// Message Log Tests - Testing per-group logs and date bucketing

use super::text_message;
use crate::chat::{group_by_date_in, Message};
use crate::storage::keys::messages_key;
use crate::storage::{Codec, KeyValueStore, MemoryStore, MessageLog};
use chrono::{FixedOffset, NaiveDate, Utc};

// 2023-11-14T22:13:20Z
const BASE_TS: i64 = 1_700_000_000_000;
const HOUR_MS: i64 = 3_600_000;

#[test]
fn test_load_unknown_group_is_empty() {
    let mut store = MemoryStore::new();
    let log = MessageLog::new(&mut store, Codec::Json);

    assert!(log.load("nobody").expect("load").is_empty());
}

#[test]
fn test_append_preserves_order() {
    let mut store = MemoryStore::new();
    let mut log = MessageLog::new(&mut store, Codec::Json);

    // Timestamps deliberately out of order: insertion order wins
    let m1 = text_message("1", "u1", "first", BASE_TS + 2_000);
    let m2 = text_message("2", "u2", "second", BASE_TS);
    let m3 = text_message("3", "u1", "third", BASE_TS + 1_000);

    log.append("g1", m1.clone()).expect("append");
    log.append("g1", m2.clone()).expect("append");
    log.append("g1", m3.clone()).expect("append");

    assert_eq!(log.load("g1").expect("load"), vec![m1, m2, m3]);
}

#[test]
fn test_logs_are_group_scoped() {
    let mut store = MemoryStore::new();
    {
        let mut log = MessageLog::new(&mut store, Codec::Json);
        log.append("g1", text_message("1", "u1", "in g1", BASE_TS)).expect("append");
        log.append("g2", text_message("1", "u1", "in g2", BASE_TS)).expect("append");
        log.remove("g1", "1").expect("remove");
    }

    assert_eq!(
        store.keys().expect("keys"),
        vec![messages_key("g1"), messages_key("g2")]
    );

    let log = MessageLog::new(&mut store, Codec::Json);
    assert!(log.load("g1").expect("load").is_empty());
    assert_eq!(log.load("g2").expect("load")[0].content, "in g2");
}

#[test]
fn test_update_replaces_matching_message() {
    let mut store = MemoryStore::new();
    let mut log = MessageLog::new(&mut store, Codec::Json);
    log.append("g1", text_message("1", "u1", "typo", BASE_TS)).expect("append");
    log.append("g1", text_message("2", "u1", "fine", BASE_TS)).expect("append");

    log.update("g1", text_message("1", "u1", "fixed", BASE_TS)).expect("update");

    let contents: Vec<String> = log
        .load("g1")
        .expect("load")
        .into_iter()
        .map(|m| m.content)
        .collect();
    assert_eq!(contents, vec!["fixed", "fine"]);
}

#[test]
fn test_update_missing_message_is_noop() {
    let mut store = MemoryStore::new();
    let mut log = MessageLog::new(&mut store, Codec::Json);
    log.append("g1", text_message("1", "u1", "hello", BASE_TS)).expect("append");
    let before = log.load("g1").expect("load");

    log.update("g1", text_message("99", "u1", "ghost", BASE_TS)).expect("update");

    assert_eq!(log.load("g1").expect("load"), before);
}

#[test]
fn test_remove_and_clear() {
    let mut store = MemoryStore::new();
    let mut log = MessageLog::new(&mut store, Codec::Cbor);
    log.append("g1", text_message("1", "u1", "a", BASE_TS)).expect("append");
    log.append("g1", text_message("2", "u1", "b", BASE_TS)).expect("append");

    log.remove("g1", "1").expect("remove");
    let remaining = log.load("g1").expect("load");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");

    log.clear("g1").expect("clear");
    assert!(log.load("g1").expect("load").is_empty());
    assert!(store.keys().expect("keys").is_empty());
}

#[test]
fn test_text_message_trims_and_rejects_blank() {
    let message = Message::text("u1", "  hello there \n").expect("non-blank");
    assert_eq!(message.content, "hello there");
    assert!(message.id.parse::<i64>().expect("numeric id") >= message.timestamp);

    assert!(Message::text("u1", "   \n\t").is_none());
}

#[test]
fn test_messages_created_back_to_back_get_distinct_ids() {
    let mut store = MemoryStore::new();
    let mut log = MessageLog::new(&mut store, Codec::Json);

    let first = Message::text("u1", "one").expect("non-blank");
    let second = Message::image("u1", "data:image/png;base64,AAAA");
    assert_ne!(first.id, second.id);

    log.append("g1", first).expect("append");
    log.append("g1", second.clone()).expect("append");
    let first_id = log.load("g1").expect("load")[0].id.clone();
    log.remove("g1", &first_id).expect("remove");

    let remaining = log.load("g1").expect("load");
    assert_eq!(remaining, vec![second]);
}

#[test]
fn test_group_by_date_labels() {
    let messages = vec![
        text_message("1", "u1", "late night", BASE_TS),
        text_message("2", "u1", "after midnight", BASE_TS + 2 * HOUR_MS),
    ];

    let buckets = group_by_date_in(&messages, &Utc);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, "11/14/2023");
    assert_eq!(buckets[0].date, NaiveDate::from_ymd_opt(2023, 11, 14));
    assert_eq!(buckets[1].label, "11/15/2023");
}

#[test]
fn test_group_by_date_respects_time_zone() {
    let messages = vec![
        text_message("1", "u1", "late night", BASE_TS),
        text_message("2", "u1", "after midnight", BASE_TS + 2 * HOUR_MS),
    ];
    let new_york = FixedOffset::west_opt(5 * 3600).expect("valid offset");

    let buckets = group_by_date_in(&messages, &new_york);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].label, "11/14/2023");
    assert_eq!(buckets[0].messages.len(), 2);
}

#[test]
fn test_group_by_date_first_appearance_order() {
    let day = 24 * HOUR_MS;
    let messages = vec![
        text_message("1", "u1", "day two", BASE_TS + day),
        text_message("2", "u1", "day one", BASE_TS),
        text_message("3", "u1", "day two again", BASE_TS + day + 1_000),
    ];

    let buckets = group_by_date_in(&messages, &Utc);

    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["11/15/2023", "11/14/2023"]);
    let ids: Vec<&str> = buckets[0].messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_group_by_date_empty() {
    assert!(group_by_date_in(&[], &Utc).is_empty());
}
