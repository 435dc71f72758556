//! Key-value storage backends.
//!
//! Every store in this crate persists its whole state as one string value
//! under one key. Backends only need to get, overwrite and remove values;
//! there is no locking and no versioning, so concurrent writers race and the
//! last write wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{VeloriaError, VeloriaResult};

/// A flat string-to-string store.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> VeloriaResult<Option<String>>;

    /// Overwrite the value at `key`.
    fn set(&self, key: &str, value: &str) -> VeloriaResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> VeloriaResult<()>;
}

/// Process-local storage. Used for the session scope and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> VeloriaResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| VeloriaError::Storage("memory storage lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> VeloriaResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| VeloriaError::Storage("memory storage lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> VeloriaResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| VeloriaError::Storage("memory storage lock poisoned".into()))?;
        values.remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_name_for(key)))
    }
}

/// Map a storage key to a filesystem-safe name ("services:v1" -> "services_v1").
fn file_name_for(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> VeloriaResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> VeloriaResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", file_name_for(key)));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> VeloriaResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites_and_removes() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));

        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_name_for() {
        assert_eq!(file_name_for("services:v1"), "services_v1");
        assert_eq!(file_name_for("veloria_clients_v1"), "veloria_clients_v1");
        assert_eq!(file_name_for("../etc/passwd"), "___etc_passwd");
    }
}
