use super::files::{atomic_write, ensure_dir, read_file, remove_file};
use anyhow::Result;
#[cfg(test)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key under which the task list is stored
pub const TASKS_KEY: &str = "tasks";

/// Key under which the dark-mode flag is stored
pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable string key-value storage
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if missing
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = ensure_dir(dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        remove_file(self.path_for(key))?;
        Ok(())
    }
}

/// In-memory store
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path().join("board")).unwrap();

        assert!(store.load(TASKS_KEY).unwrap().is_none());

        store.save(TASKS_KEY, "[]").unwrap();
        assert_eq!(store.load(TASKS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(store.path_for(TASKS_KEY).ends_with("tasks.json"));

        store.remove(TASKS_KEY).unwrap();
        assert!(store.load(TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_store_keys_are_separate() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();

        store.save(TASKS_KEY, "[]").unwrap();
        store.save(DARK_MODE_KEY, "true").unwrap();

        assert_eq!(store.load(TASKS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.load(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load("k").unwrap().is_none());
        store.save("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
    }
}
