//! Key/value storage backends for the session.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

/// A durable string key/value store.
///
/// Writes must be visible to the next `get` on any handle over the same
/// backing store.
pub trait SessionStorage: Debug + Send + Sync {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a value. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Storage persisted as a JSON object in a single file.
///
/// The file is re-read on every access so that other handles (and other
/// processes) observe writes immediately.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read session file");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = ?self.path, error = %e, "Session file is corrupt, ignoring it");
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_clones_share_entries() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set("token", "abc").unwrap();
        assert_eq!(b.get("token").as_deref(), Some("abc"));

        b.remove("token").unwrap();
        assert!(a.get("token").is_none());
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quickstore").join("session.json");

        FileStorage::new(&path).set("token", "abc").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("token").as_deref(), Some("abc"));
    }

    #[test]
    fn test_file_storage_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        storage.set("token", "abc").unwrap();
        storage.set("user", "{}").unwrap();
        storage.remove("token").unwrap();

        assert!(storage.get("token").is_none());
        assert_eq!(storage.get("user").as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nothing.json"));

        assert!(storage.get("token").is_none());
        storage.remove("token").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "garbage").unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.get("token").is_none());

        storage.set("token", "fresh").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("fresh"));
    }
}
