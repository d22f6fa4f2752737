pub mod models {
    pub mod bookmark;
    pub mod contest;
    pub mod platform;
}

pub mod dto {
    pub mod bookmark;
    pub mod common;
    pub mod contest;
}

pub mod bookmarks;
pub mod classifier;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod storage;
pub mod store;
pub mod sync;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{bookmark::BookmarkSet, contest::Contest, platform::Platform};

// Re-export DTOs
pub use dto::{
    bookmark::{BookmarkListResponse, ToggleBookmarkRequest},
    common::ErrorResponse,
};

pub use bookmarks::BookmarkManager;
pub use classifier::{classify, classify_now, ContestViews};
pub use config::TrackerConfig;
pub use countdown::{Countdown, CountdownLabel, COUNTDOWN_REFRESH_MS};
pub use dashboard::{Dashboard, LoadStatus, RequestSequencer, RequestTicket, FETCH_ERROR_MESSAGE};
pub use filter::{PlatformSelection, PlatformToggle};
pub use storage::{KeyValueStore, MemoryStore, StorageError, StorageKey};
pub use store::ContestStore;
pub use sync::{BookmarkIdentity, BookmarkRemote, SyncOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_end_to_end_from_json() {
        let now = Utc::now();
        let body = json!([
            {"id": "a", "name": "Past Round", "url": "https://codeforces.com/contest/1",
             "platform": "codeforces", "startTime": (now - Duration::hours(1)).to_rfc3339()},
            {"id": "b", "name": "Next Round", "url": "https://codeforces.com/contest/2",
             "platform": "codeforces", "startTime": (now + Duration::hours(1)).to_rfc3339()},
            {"id": "c", "name": "Later Round", "url": "https://codeforces.com/contest/3",
             "platform": "codeforces", "startTime": (now + Duration::hours(2)).to_rfc3339()}
        ]);

        let records: Vec<serde_json::Value> = serde_json::from_value(body).unwrap();
        let mut store = ContestStore::new();
        store.load(records).unwrap();
        let views = classify(
            store.contests(),
            &PlatformSelection::only(Platform::Codeforces),
            &BookmarkSet::new(),
            now,
        );
        let upcoming: Vec<_> = views.upcoming.iter().map(|c| c.id.as_str()).collect();
        let past: Vec<_> = views.past.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(past, vec!["a"]);
        assert_eq!(upcoming, vec!["b", "c"]);
    }
}
