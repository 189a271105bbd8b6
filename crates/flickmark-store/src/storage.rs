use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed for key `{key}`: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("storage write failed for key `{key}`: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Whether a mutation reached durable storage or only the in-memory state.
/// The in-memory state is authoritative for the current process either way;
/// storage only seeds the next launch.
#[derive(Debug)]
pub enum WriteStatus {
    Persisted,
    MemoryOnly(StorageError),
}

impl WriteStatus {
    pub fn is_persisted(&self) -> bool {
        matches!(self, WriteStatus::Persisted)
    }
}

/// Durable key -> value storage, one string value per key. Absent keys are
/// not an error. Implementations are not expected to be shared between
/// processes; concurrent writers are last-writer-wins.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one file per key under a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write = || -> io::Result<()> {
            std::fs::create_dir_all(&self.dir)?;
            // Atomic write: write to temp file, then rename
            let path = self.path_for(key);
            let temp_path = path.with_extension("tmp");
            std::fs::write(&temp_path, value)?;
            std::fs::rename(&temp_path, &path)
        };
        write().map_err(|e| StorageError::Write {
            key: key.to_string(),
            source: e,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

/// In-memory storage for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(storage.get("wishlist").unwrap().is_none());

        storage.set("wishlist", "[]").unwrap();
        assert_eq!(storage.get("wishlist").unwrap().as_deref(), Some("[]"));

        storage.remove("wishlist").unwrap();
        assert!(storage.get("wishlist").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_remove_missing_key_is_ok() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(storage.remove("language").is_ok());
    }

    #[test]
    fn test_file_storage_creates_data_dir_on_first_write() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data");
        let mut storage = FileStorage::new(&nested);
        storage.set("language", "fr").unwrap();
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("fr"));
    }
}
