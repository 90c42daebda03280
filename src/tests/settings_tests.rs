// Settings Tests - Testing settings persistence and backend selection

use crate::chat::{PALETTE, DEFAULT_USER_AVATAR_TEMPLATE};
use crate::storage::{BackendKind, Codec, KeyValueStore, Settings};
use tempfile::TempDir;

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.storage_path, "./data");
    assert_eq!(settings.backend, BackendKind::Files);
    assert_eq!(settings.codec, Codec::Json);
    assert_eq!(settings.default_timer_minutes, 20);
    assert_eq!(settings.user_avatar_template, DEFAULT_USER_AVATAR_TEMPLATE);
}

#[test]
fn test_settings_missing_or_empty_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");

    assert_eq!(Settings::load(&path).expect("load"), Settings::default());

    std::fs::write(&path, "  \n").expect("write");
    assert_eq!(Settings::load(&path).expect("load"), Settings::default());
}

#[test]
fn test_settings_save_load() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config").join("settings.json");

    let settings = Settings {
        backend: BackendKind::Sqlite,
        codec: Codec::Cbor,
        default_timer_minutes: 45,
        ..Settings::default()
    };
    settings.save(&path).expect("Failed to save settings");

    assert_eq!(Settings::load(&path).expect("Failed to load settings"), settings);
}

#[test]
fn test_settings_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"backend": "memory", "codec": "cbor"}"#).expect("write");

    let settings = Settings::load(&path).expect("load");

    assert_eq!(settings.backend, BackendKind::Memory);
    assert_eq!(settings.codec, Codec::Cbor);
    assert_eq!(settings.default_timer_minutes, 20);
}

#[test]
fn test_settings_invalid_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(Settings::load(&path).is_err());
}

#[test]
fn test_open_file_backend() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings {
        storage_path: dir.path().join("store").to_string_lossy().to_string(),
        ..Settings::default()
    };

    let mut backend = settings.open_backend().expect("open");
    backend.set("k", b"v".to_vec()).expect("set");

    assert!(dir.path().join("store").join("k").exists());
}

#[test]
fn test_new_user_and_group_avatars() {
    let settings = Settings {
        user_avatar_template: "https://avatars.test/{seed}.png".to_string(),
        ..Settings::default()
    };

    let user = settings.new_user("Alice");
    assert_eq!(user.avatar, format!("https://avatars.test/{}.png", user.id));
    assert_eq!(user.message_color.as_deref(), Some(PALETTE[0]));

    let group = settings.new_group("Team");
    assert!(group.members.is_empty());
    assert!(group.avatar.ends_with("seed=Team"));

    assert_eq!(settings.new_countdown().duration, 20 * 60);
}
