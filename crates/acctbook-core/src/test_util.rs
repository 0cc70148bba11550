//! Shared test helpers for `acctbook-core` unit tests.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::storage::{MemoryStorage, Storage};

/// A path under `tmp/` that no other test run will use. The directory
/// is not created up front and is removed, if present, on drop.
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let unique = format!(
            "{prefix}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("system time before unix epoch")
                .as_nanos()
        );
        Self(Path::new("tmp").join(unique))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Storage that reads from an inner `MemoryStorage` but can be told to
/// fail reads or writes.
#[derive(Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Storage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        if self.fail_reads {
            return Err(CoreError::Storage {
                key: key.to_string(),
                message: "read refused".into(),
            });
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        if self.fail_writes {
            return Err(CoreError::Storage {
                key: key.to_string(),
                message: "quota exceeded".into(),
            });
        }
        self.inner.set(key, value)
    }
}
