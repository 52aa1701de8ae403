use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::notification::Notification;
use crate::models::profile::FinancialProfile;

/// Key under which the financial profile is stored.
pub const PROFILE_KEY: &str = "userFinancialData";

/// Key under which the notification list is stored.
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// String key-value storage, the shape of a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), CoreError>;
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

/// Store kept entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by one JSON object on disk, rewritten on every change.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), CoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Typed JSON access to the profile and notification entries of a store.
pub struct ProfileStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> ProfileStore<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn load_profile(&self) -> Result<Option<FinancialProfile>, CoreError> {
        match self.store.get(PROFILE_KEY)? {
            Some(raw) => {
                let profile: FinancialProfile = serde_json::from_str(&raw)?;
                profile.validate()?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    pub fn save_profile(&mut self, profile: &FinancialProfile) -> Result<(), CoreError> {
        let raw = serde_json::to_string(profile).map_err(|e| CoreError::Serialization(e.to_string()))?;
        self.store.set(PROFILE_KEY, raw)
    }

    /// Missing entry reads as an empty list.
    pub fn load_notifications(&self) -> Result<Vec<Notification>, CoreError> {
        match self.store.get(NOTIFICATIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_notifications(&mut self, notifications: &[Notification]) -> Result<(), CoreError> {
        let raw = serde_json::to_string(notifications).map_err(|e| CoreError::Serialization(e.to_string()))?;
        self.store.set(NOTIFICATIONS_KEY, raw)
    }
}
