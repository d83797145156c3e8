use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use std::path::{Path, PathBuf};
use taskboard_core::{BoardError, BoardResult};

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// File backing `key`. Keys are restricted to a single path component.
    pub fn path_for(&self, key: &str) -> BoardResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(BoardError::Validation(format!(
                "Invalid storage key: {key:?}"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        AtomicWriter::read_to_string(&self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> BoardResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value.as_bytes())?;
        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        match std::fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path());

        assert_eq!(store.get("kanbanTasks").unwrap(), None);
        store.set("kanbanTasks", "{}").unwrap();
        assert_eq!(store.get("kanbanTasks").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("kanbanTasks.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path());

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileKeyValueStore::new("/tmp");
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("..").is_err());
        assert!(store.path_for("board-1").is_ok());
    }
}
