use crate::countdown::COUNTDOWN_REFRESH_MS;
use crate::storage::StorageKey;
use serde::{Deserialize, Serialize};

/// Default contest API origin used during development
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Runtime settings for the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Origin of the contest and bookmark endpoints, without a trailing slash
    pub api_base_url: String,
    /// Countdown refresh period in milliseconds
    pub countdown_refresh_ms: u32,
    /// localStorage key holding the bookmark list
    pub bookmarks_key: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            countdown_refresh_ms: COUNTDOWN_REFRESH_MS,
            bookmarks_key: StorageKey::Bookmarks.as_str().to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Joins an API path onto the configured origin.
    pub fn api_url(&self, path: &str) -> String {
        if self.api_base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.api_base_url, path)
        }
    }

    pub fn contests_url(&self) -> String {
        self.api_url("/api/contests")
    }

    pub fn bookmarks_url(&self) -> String {
        self.api_url("/api/bookmarks")
    }

    /// Per-identity bookmark endpoint; the email is percent-encoded.
    pub fn bookmarks_for_url(&self, email: &str) -> String {
        format!("{}/{}", self.bookmarks_url(), urlencoding::encode(email))
    }
}
