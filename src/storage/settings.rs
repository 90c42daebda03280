//! Workspace settings and configuration

use crate::{
    chat::{avatar_url, ChatGroup, User, DEFAULT_GROUP_AVATAR_TEMPLATE, DEFAULT_USER_AVATAR_TEMPLATE},
    productivity::Countdown,
    storage::{
        backend::{FileStore, KeyValueStore, MemoryStore},
        codec::Codec,
        storage_db::SqliteStore,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};

/// Which storage backend the workspace persists to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Nothing survives the process
    Memory,
    /// One file per key under `storage_path`
    #[default]
    Files,
    /// A single SQLite database at `storage_path/chatroom.db`
    Sqlite,
}

/// Workspace settings
///
/// Stored as JSON. Missing fields take their defaults, so older settings
/// files keep loading.
///
/// # Example
/// ```rust,no_run
/// use chatroom::storage::Settings;
///
/// let settings = Settings::load("settings.json").expect("Failed to load");
/// let backend = settings.open_backend().expect("Failed to open backend");
/// println!("Storage path: {}", settings.storage_path);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage path for workspace data
    pub storage_path: String,
    /// Storage backend
    pub backend: BackendKind,
    /// Encoding of stored values
    pub codec: Codec,
    /// Initial countdown duration in minutes
    pub default_timer_minutes: u32,
    /// Avatar URL template for new users; `{seed}` is replaced
    pub user_avatar_template: String,
    /// Avatar URL template for new groups; `{seed}` is replaced
    pub group_avatar_template: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Storage(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Storage(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to a JSON file, creating the parent directory if needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Storage(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Storage(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Open the configured backend
    pub fn open_backend(&self) -> Result<Box<dyn KeyValueStore>> {
        let backend: Box<dyn KeyValueStore> = match self.backend {
            BackendKind::Memory => Box::new(MemoryStore::new()),
            BackendKind::Files => Box::new(FileStore::new(&self.storage_path)?),
            BackendKind::Sqlite => Box::new(SqliteStore::new(
                std::path::Path::new(&self.storage_path).join("chatroom.db"),
            )?),
        };
        Ok(backend)
    }

    /// Create a user whose avatar is seeded with the new user's id
    pub fn new_user(&self, name: impl Into<String>) -> User {
        let mut user = User::new(name, String::new());
        user.avatar = avatar_url(&self.user_avatar_template, &user.id);
        user
    }

    /// Create a group whose avatar is seeded with its name
    pub fn new_group(&self, name: impl Into<String>) -> ChatGroup {
        let name = name.into();
        let avatar = avatar_url(&self.group_avatar_template, &name);
        ChatGroup::new(name, avatar)
    }

    /// Countdown initialized with the configured default duration
    pub fn new_countdown(&self) -> Countdown {
        Countdown::with_minutes(self.default_timer_minutes)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: "./data".to_string(),
            backend: BackendKind::Files,
            codec: Codec::Json,
            default_timer_minutes: 20,
            user_avatar_template: DEFAULT_USER_AVATAR_TEMPLATE.to_string(),
            group_avatar_template: DEFAULT_GROUP_AVATAR_TEMPLATE.to_string(),
        }
    }
}
