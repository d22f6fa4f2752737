use crate::SharedError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage keys used by the tracker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON array of bookmarked contest ids
    Bookmarks,
    /// Email identity for remote bookmark sync
    BookmarkIdentity,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Bookmarks => "bookmarkedContests",
            StorageKey::BookmarkIdentity => "bookmarkIdentity",
        }
    }
}

/// Storage error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage not available: {0}")]
    NotAvailable(String),

    #[error("Storage quota exceeded")]
    QuotaExceeded,

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),
}

impl From<StorageError> for SharedError {
    fn from(error: StorageError) -> Self {
        SharedError::Persistence(error.to_string())
    }
}

/// Synchronous string key-value store, the shape of browser localStorage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same map, like handles to one localStorage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap(), Some("v".to_string()));
        other.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_storage_error_becomes_persistence() {
        let err: SharedError = StorageError::QuotaExceeded.into();
        assert_eq!(err, SharedError::Persistence("Storage quota exceeded".to_string()));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(StorageKey::Bookmarks.as_str(), "bookmarkedContests");
        assert_eq!(StorageKey::BookmarkIdentity.as_str(), "bookmarkIdentity");
    }
}
