use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::{KeyValueStore, StorageError};

/// `window.localStorage`, exposed as a [`KeyValueStore`].
///
/// Values are stored verbatim; callers decide the encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageBackend;

impl KeyValueStore for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Browsers report a full store as an exception from setItem.
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// Maps a typed gloo-storage failure onto the tracker's storage error.
pub fn storage_error(error: GlooStorageError) -> StorageError {
    match error {
        GlooStorageError::KeyNotFound(key) => StorageError::Read(format!("no value under '{}'", key)),
        GlooStorageError::SerdeError(e) => StorageError::Read(e.to_string()),
        GlooStorageError::JsError(e) => StorageError::NotAvailable(e.to_string()),
    }
}
