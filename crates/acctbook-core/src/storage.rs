//! Synchronous key-value persistence.
//!
//! Defines the [`Storage`] trait the account store mirrors into, plus an
//! in-memory backend ([`MemoryStorage`]) and a directory-backed one
//! ([`DirStorage`]) that keeps each key in its own `<key>.json` file.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::CoreError;

/// Minimal string key-value store. Every `set` replaces the whole value.
pub trait Storage {
    /// Read the value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

// ==============================================================================
// In-memory Backend
// ==============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the trait.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ==============================================================================
// Directory Backend
// ==============================================================================

/// Stores each key as `<dir>/<key>.json`. The directory is created
/// lazily on first write.
#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(CoreError::Storage {
                key: key.to_string(),
                message: "key must be a plain file name".into(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, value)?;
        tracing::trace!(path = %path.display(), bytes = value.len(), "wrote storage key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TempDir;

    #[test]
    fn memory_storage_overwrites_values() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").expect("get"), None);

        storage.set("k", "one").expect("first set");
        storage.set("k", "two").expect("second set");
        assert_eq!(storage.get("k").expect("get").as_deref(), Some("two"));
    }

    #[test]
    fn dir_storage_missing_key_is_none() {
        let dir = TempDir::new("missing-key");
        let storage = DirStorage::new(dir.path());
        assert_eq!(storage.get("accounts").expect("get missing key"), None);
        assert!(!dir.path().exists());
    }

    #[test]
    fn dir_storage_creates_directory_and_round_trips() {
        let dir = TempDir::new("round-trip");
        let mut storage = DirStorage::new(dir.path());

        storage.set("accounts", "[]").expect("write key");
        assert!(dir.path().join("accounts.json").is_file());
        assert_eq!(storage.get("accounts").expect("read key").as_deref(), Some("[]"));
    }

    #[test]
    fn dir_storage_rejects_path_like_keys() {
        let dir = TempDir::new("bad-key");
        let mut storage = DirStorage::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                storage.set(key, "x"),
                Err(CoreError::Storage { .. })
            ));
        }
        assert!(!dir.path().exists());
    }

    #[test]
    fn temp_dir_is_removed_on_drop() {
        let path = {
            let dir = TempDir::new("drop-cleanup");
            let mut storage = DirStorage::new(dir.path());
            storage.set("accounts", "[]").expect("write key");
            assert!(dir.path().is_dir());
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
