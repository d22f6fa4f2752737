use crate::models::bookmark::BookmarkSet;
use crate::storage::{KeyValueStore, StorageKey};
use crate::SharedError;
use log::{debug, warn};

/// Owns the bookmark set and keeps it mirrored in a key-value store.
///
/// Storage problems never escape this type: unreadable data loads as an
/// empty set and failed writes are logged while the in-memory set stays
/// authoritative.
#[derive(Debug, Clone)]
pub struct BookmarkManager<S> {
    store: S,
    key: String,
    bookmarks: BookmarkSet,
}

impl<S: KeyValueStore> BookmarkManager<S> {
    /// Loads the persisted set under the default key.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, StorageKey::Bookmarks.as_str())
    }

    pub fn load_with_key(store: S, key: &str) -> Self {
        let bookmarks = read_bookmarks(&store, key);
        debug!("Loaded {} bookmarks from '{}'", bookmarks.len(), key);
        Self {
            store,
            key: key.to_string(),
            bookmarks,
        }
    }

    /// Flips membership of `contest_id` and persists before returning.
    /// Returns whether the contest is now bookmarked.
    pub fn toggle(&mut self, contest_id: &str) -> bool {
        let bookmarked = self.bookmarks.toggle(contest_id);
        debug!(
            "Bookmark {} {}",
            contest_id,
            if bookmarked { "added" } else { "removed" }
        );
        self.persist();
        bookmarked
    }

    /// Adds any ids not already bookmarked; returns how many were added.
    pub fn merge<I: IntoIterator<Item = String>>(&mut self, ids: I) -> usize {
        let added = self.bookmarks.extend_missing(ids);
        if added > 0 {
            self.persist();
        }
        added
    }

    pub fn is_bookmarked(&self, contest_id: &str) -> bool {
        self.bookmarks.contains(contest_id)
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.bookmarks)
            .map_err(SharedError::from)
            .and_then(|json| self.store.set_item(&self.key, &json).map_err(SharedError::from));
        if let Err(e) = result {
            warn!("Failed to persist {} bookmarks: {}", self.bookmarks.len(), e);
        }
    }
}

fn read_bookmarks<S: KeyValueStore>(store: &S, key: &str) -> BookmarkSet {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BookmarkSet::new(),
        Err(e) => {
            warn!("Bookmark storage unreadable, starting empty: {}", SharedError::from(e));
            return BookmarkSet::new();
        }
    };
    match serde_json::from_str::<BookmarkSet>(&raw) {
        Ok(set) => set,
        Err(e) => {
            warn!("Ignoring malformed bookmark data under '{}': {}", key, e);
            BookmarkSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Reads fine, refuses every write
    #[derive(Debug, Clone, Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::NotAvailable("private mode".to_string()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::NotAvailable("private mode".to_string()))
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn persisted(store: &MemoryStore) -> Option<String> {
        store.get_item("bookmarkedContests").unwrap()
    }

    #[test]
    fn test_absent_storage_loads_empty() {
        let manager = BookmarkManager::load(MemoryStore::new());
        assert!(manager.bookmarks().is_empty());
    }

    #[rstest]
    #[case("not json at all")]
    #[case("{\"ids\": [1, 2]}")]
    #[case("[1, 2, 3]")]
    #[case("")]
    fn test_corrupt_storage_loads_empty(#[case] raw: &str) {
        let store = MemoryStore::new().with_item("bookmarkedContests", raw);
        let manager = BookmarkManager::load(store);
        assert!(manager.bookmarks().is_empty());
    }

    #[test]
    fn test_unreadable_storage_loads_empty() {
        let mut manager = BookmarkManager::load(BrokenStore);
        assert!(manager.bookmarks().is_empty());
        assert!(manager.toggle("cf-1"));
        assert!(manager.is_bookmarked("cf-1"));
    }

    #[test]
    fn test_toggle_persists_every_mutation() {
        let store = MemoryStore::new();
        let mut manager = BookmarkManager::load(store.clone());

        assert!(manager.toggle("cf-1"));
        assert_eq!(persisted(&store), Some(r#"["cf-1"]"#.to_string()));
        assert!(manager.toggle("lc-7"));
        assert_eq!(persisted(&store), Some(r#"["cf-1","lc-7"]"#.to_string()));
        assert!(!manager.toggle("cf-1"));
        assert_eq!(persisted(&store), Some(r#"["lc-7"]"#.to_string()));

        let reloaded = BookmarkManager::load(store);
        assert_eq!(reloaded.bookmarks(), manager.bookmarks());
    }

    #[test]
    fn test_rapid_repeated_toggles_do_not_lose_updates() {
        let store = MemoryStore::new();
        let mut manager = BookmarkManager::load(store.clone());
        for i in 0..7 {
            let now_bookmarked = manager.toggle("cc-START1");
            assert_eq!(now_bookmarked, i % 2 == 0);
            let reloaded = BookmarkManager::load(store.clone());
            assert_eq!(reloaded.is_bookmarked("cc-START1"), now_bookmarked);
        }
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let store = MemoryStore::new().with_item("bookmarkedContests", r#"["a"]"#);
        let mut manager = BookmarkManager::load(store);
        for id in ["a", "b"] {
            let before = manager.is_bookmarked(id);
            manager.toggle(id);
            manager.toggle(id);
            assert_eq!(manager.is_bookmarked(id), before);
        }
    }

    #[test]
    fn test_failed_write_keeps_memory_authoritative() {
        let mut manager = BookmarkManager::load(ReadOnlyStore::default());
        assert!(manager.toggle("cf-2"));
        assert!(manager.is_bookmarked("cf-2"));
    }

    #[test]
    fn test_merge_appends_missing_ids() {
        let store = MemoryStore::new();
        let mut manager = BookmarkManager::load(store.clone());
        manager.toggle("local");

        assert_eq!(manager.merge(vec!["local".to_string(), "remote".to_string()]), 1);
        assert_eq!(persisted(&store), Some(r#"["local","remote"]"#.to_string()));
        assert_eq!(manager.merge(Vec::new()), 0);
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut manager = BookmarkManager::load_with_key(store.clone(), "alt");
        manager.toggle("x");
        assert_eq!(store.get_item("alt").unwrap(), Some(r#"["x"]"#.to_string()));
        assert_eq!(persisted(&store), None);
    }
}
