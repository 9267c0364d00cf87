//! Persistence adapter: the card sequence as one JSON blob in a key-value store
//!
//! The board never talks to a backend directly. It goes through [`CardStorage`],
//! which reads and writes the whole sequence under a single key of a
//! [`BlobStore`].

mod file;
mod memory;

pub use file::{FileBlobStore, FileLock};
pub use memory::MemoryBlobStore;

use crate::error::Result;
use crate::types::Card;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "trello-board-cards";

/// A key-value store of string blobs
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` when nothing was stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Loads and saves the full card sequence under one key
#[derive(Debug, Clone)]
pub struct CardStorage<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> CardStorage<S> {
    /// Bind a store to the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Bind a store to a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the saved sequence.
    ///
    /// Anything that is not a readable JSON array of cards counts as "no prior
    /// data" and yields an empty sequence.
    pub fn load(&self) -> Vec<Card> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no saved cards");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read saved cards, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Card>>(&raw) {
            Ok(cards) => {
                tracing::debug!(key = %self.key, count = cards.len(), "loaded cards");
                cards
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unparseable saved cards");
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence and overwrite the stored value
    pub fn save(&mut self, cards: &[Card]) -> Result<()> {
        let content = serde_json::to_string(cards)?;
        self.store.set(&self.key, &content)?;
        tracing::trace!(key = %self.key, count = cards.len(), "saved cards");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanbanError;

    fn sample() -> Vec<Card> {
        vec![
            Card::with_id("1", "a", "todo"),
            Card::with_id("2", "b", "done"),
            Card::with_id("3", "c", "todo"),
        ]
    }

    #[test]
    fn test_load_empty_store() {
        let storage = CardStorage::new(MemoryBlobStore::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = CardStorage::new(MemoryBlobStore::new());
        storage.save(&sample()).unwrap();
        assert_eq!(storage.load(), sample());
    }

    #[test]
    fn test_save_overwrites() {
        let mut storage = CardStorage::new(MemoryBlobStore::new());
        storage.save(&sample()).unwrap();
        storage.save(&sample()[..1]).unwrap();
        assert_eq!(storage.load().len(), 1);
    }

    #[test]
    fn test_garbage_is_treated_as_absent() {
        let store = MemoryBlobStore::new();
        let mut raw = store.clone();
        let storage = CardStorage::new(store);

        for garbage in ["not json", "{\"id\":\"1\"}", "[{\"id\":1,\"text\":\"a\",\"column\":\"x\"}]", "null"] {
            raw.set(DEFAULT_STORAGE_KEY, garbage).unwrap();
            assert!(storage.load().is_empty(), "{garbage} should load as empty");
        }
    }

    #[test]
    fn test_reads_the_source_format() {
        let mut raw = MemoryBlobStore::new();
        raw.set(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"1700000000000","text":"Buy milk","column":"todo"}]"#,
        )
        .unwrap();

        let cards = CardStorage::new(raw).load();
        assert_eq!(cards, vec![Card::with_id("1700000000000", "Buy milk", "todo")]);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = MemoryBlobStore::new();
        let mut a = CardStorage::with_key(store.clone(), "a");
        let b = CardStorage::with_key(store, "b");
        a.save(&sample()).unwrap();
        assert_eq!(a.key(), "a");
        assert!(b.load().is_empty());
    }

    struct FailingStore;

    impl BlobStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(KanbanError::LockBusy)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(KanbanError::LockBusy)
        }
    }

    #[test]
    fn test_read_failure_loads_empty_but_write_failure_surfaces() {
        let mut storage = CardStorage::new(FailingStore);
        assert!(storage.load().is_empty());
        assert!(matches!(storage.save(&sample()), Err(KanbanError::LockBusy)));
    }
}
