//! File-backed blob store
//!
//! Each key is one file under the store root:
//!
//! ```text
//! .laneboard/
//! ├── .lock                     # Advisory write lock
//! └── trello-board-cards.json   # One blob per key
//! ```

use super::BlobStore;
use crate::error::{KanbanError, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each blob as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at the given directory. The directory is created
    /// lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Try to acquire the exclusive write lock (non-blocking)
    pub fn lock(&self) -> Result<FileLock> {
        self.ensure_root()?;

        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.lock_path())?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(FileLock { file }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(KanbanError::NotADirectory {
                path: self.root.clone(),
            });
        }
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        let _lock = self.lock()?;
        atomic_write(&path, value.as_bytes())
    }
}

/// RAII lock guard - releases on drop
pub struct FileLock {
    file: fs::File,
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Keys become file names, so they must stay a single path component
fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control);
    if bad {
        return Err(KanbanError::invalid_key(key));
    }
    Ok(())
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename is atomic on the same filesystem
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileBlobStore) {
        let temp = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp.path().join(".laneboard"));
        (temp, store)
    }

    #[test]
    fn test_paths() {
        let (temp, store) = setup();
        let root = temp.path().join(".laneboard");

        assert_eq!(store.root(), root);
        assert_eq!(store.lock_path(), root.join(".lock"));
        assert_eq!(
            store.blob_path("cards").unwrap(),
            root.join("cards.json")
        );
    }

    #[test]
    fn test_missing_blob_is_none() {
        let (_temp, store) = setup();
        assert_eq!(store.get("cards").unwrap(), None);
    }

    #[test]
    fn test_set_creates_root_and_overwrites() {
        let (_temp, mut store) = setup();
        assert!(!store.root().exists());

        store.set("cards", "[]").unwrap();
        assert!(store.root().is_dir());
        assert_eq!(store.get("cards").unwrap().as_deref(), Some("[]"));

        store.set("cards", "[1]").unwrap();
        assert_eq!(store.get("cards").unwrap().as_deref(), Some("[1]"));
        assert!(!store.root().join("cards.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_temp, mut store) = setup();
        for key in ["", "../up", "a/b", ".lock", "a\\b"] {
            assert!(
                matches!(store.set(key, "x"), Err(KanbanError::InvalidKey { .. })),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_locking() {
        let (_temp, mut store) = setup();

        let lock1 = store.lock().unwrap();

        let result = store.lock();
        assert!(matches!(result, Err(KanbanError::LockBusy)));

        // Writers see the held lock too
        assert!(matches!(store.set("cards", "[]"), Err(KanbanError::LockBusy)));

        drop(lock1);
        let _lock2 = store.lock().unwrap();
    }

    #[test]
    fn test_root_that_is_a_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blob");
        std::fs::write(&root, "x").unwrap();

        let mut store = FileBlobStore::new(&root);
        assert!(matches!(
            store.set("cards", "[]"),
            Err(KanbanError::NotADirectory { .. })
        ));
    }
}
