use crate::storage::storage_error;
use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use log::warn;
use shared::config::DEFAULT_API_BASE_URL;
use shared::{BookmarkIdentity, StorageKey, TrackerConfig};

pub struct Config;

impl Config {
    /// Origin of the contest API.
    ///
    /// Set `CONTEST_API_BASE_URL` at build time to point at another server;
    /// an empty value makes every request relative to the page (useful behind
    /// a reverse proxy that forwards `/api/`).
    pub fn api_base_url() -> String {
        option_env!("CONTEST_API_BASE_URL")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    /// Email identity for remote bookmark sync, if one was stored and is valid.
    pub fn bookmark_identity() -> Option<BookmarkIdentity> {
        let raw: String = match LocalStorage::get(StorageKey::BookmarkIdentity.as_str()) {
            Ok(raw) => raw,
            Err(GlooStorageError::KeyNotFound(_)) => return None,
            Err(e) => {
                warn!("Remote bookmark sync disabled: {}", storage_error(e));
                return None;
            }
        };
        match BookmarkIdentity::parse(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Remote bookmark sync disabled: {}", e);
                None
            }
        }
    }

    pub fn tracker() -> TrackerConfig {
        TrackerConfig::default().with_base_url(&Self::api_base_url())
    }
}
