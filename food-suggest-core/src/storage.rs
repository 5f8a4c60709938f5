//! Flat key-value persistence for store state.
//!
//! Each key maps to one JSON file in the data directory. Absent keys are
//! a normal condition, not an error; the stores treat undecodable payloads
//! the same way and fall back to their defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// File-backed key-value store.
///
/// Handles loading and saving serializable values under string keys.
#[derive(Clone)]
pub struct KvStore {
    data_dir: PathBuf,
}

impl KvStore {
    /// Creates a new store rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Checks if a value exists for a key.
    pub fn exists(&self, key: &str) -> bool {
        self.path(key).exists()
    }

    /// Loads the value stored under a key.
    ///
    /// Returns `Ok(None)` if the key is absent.
    /// Returns `Err` for other I/O or decode errors.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path(key);

        match fs::read(&path) {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| StorageError::Decode(path, e))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Saves a value under a key.
    ///
    /// Creates the data directory if it doesn't exist.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let bytes = serde_json::to_vec(value)
            .map_err(|e| StorageError::Encode(key.to_string(), e))?;

        let path = self.path(key);
        fs::write(&path, bytes).map_err(|e| StorageError::Io(path, e))?;

        Ok(())
    }

    /// Removes the value stored under a key, if any.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Loads the value for a key, treating absence and failure alike.
    ///
    /// Decode and I/O failures are logged and collapse to `None`; the
    /// stores never surface them.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.load(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable stored value");
                None
            }
        }
    }

    /// Saves a value for a key, logging failures instead of returning them.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.save(key, value) {
            warn!(key, error = %e, "failed to persist value");
        }
    }
}

/// Errors that can occur during key-value storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    #[error("I/O error for {0}: {1}")]
    Io(PathBuf, #[source] io::Error),
    /// Stored payload failed to decode against the expected shape.
    #[error("failed to decode {0}: {1}")]
    Decode(PathBuf, #[source] serde_json::Error),
    /// Value failed to serialize.
    #[error("failed to encode value for key '{0}': {1}")]
    Encode(String, #[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (KvStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_store_path() {
        let (store, _temp) = test_store();
        let path = store.path("saved_meal_ids");
        assert!(path.ends_with("saved_meal_ids.json"));
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let (store, _temp) = test_store();
        let result: Option<Vec<String>> = store.load("missing").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested_dir = temp_dir.path().join("nested").join("data");
        let store = KvStore::new(nested_dir.clone());

        store.save("key", &vec!["a".to_string()]).unwrap();

        assert!(nested_dir.exists());
        assert!(store.exists("key"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (store, _temp) = test_store();

        let value = vec!["apple".to_string(), "banana".to_string()];
        store.save("fruits", &value).unwrap();

        let loaded: Vec<String> = store.load("fruits").unwrap().unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_load_corrupt_payload_is_error() {
        let (store, _temp) = test_store();
        fs::create_dir_all(store.data_dir()).unwrap();
        fs::write(store.path("bad"), b"not json").unwrap();

        let result: Result<Option<Vec<String>>, _> = store.load("bad");
        assert!(matches!(result, Err(StorageError::Decode(_, _))));
    }

    #[test]
    fn test_get_collapses_corrupt_payload_to_none() {
        let (store, _temp) = test_store();
        fs::create_dir_all(store.data_dir()).unwrap();
        fs::write(store.path("bad"), b"{broken").unwrap();

        let value: Option<Vec<String>> = store.get("bad");
        assert!(value.is_none());
    }

    #[test]
    fn test_remove() {
        let (store, _temp) = test_store();
        store.save("key", &1u32).unwrap();
        assert!(store.exists("key"));

        store.remove("key").unwrap();
        assert!(!store.exists("key"));

        // Removing an absent key is fine
        store.remove("key").unwrap();
    }

    #[test]
    fn test_overwrite_existing_value() {
        let (store, _temp) = test_store();
        store.save("version", &1u32).unwrap();
        store.save("version", &2u32).unwrap();

        let loaded: u32 = store.load("version").unwrap().unwrap();
        assert_eq!(loaded, 2);
    }
}
