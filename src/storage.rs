use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::AppError;

/// Durable string key-value storage
pub trait Store: Send + Sync {
    /// Read the value under `key`, `None` when nothing was stored yet
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Keeps one `<key>.json` file per key inside a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Readers never see a partially written file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!("Stored {} bytes at {:?}", value.len(), path);
        Ok(())
    }
}

/// Volatile storage, for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "recipe-box-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_missing_key() {
        let store = FileStore::new(scratch_dir("missing"));
        assert!(store.get("likes").unwrap().is_none());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = scratch_dir("overwrite");
        let store = FileStore::new(&dir);
        store.set("likes", "[1]").unwrap();
        store.set("likes", "[2]").unwrap();

        assert_eq!(store.get("likes").unwrap().as_deref(), Some("[2]"));
        assert!(dir.join("likes.json").is_file());
        assert!(!dir.join("likes.json.tmp").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
