use crate::state::{TrackerAction, TrackerState};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use serde_json::Value;
use shared::{
    KeyValueStore, LoadStatus, MemoryStore, Platform, RequestSequencer, SharedError, StorageKey,
    TrackerConfig, FETCH_ERROR_MESSAGE,
};
use std::rc::Rc;
use yew::Reducible;

fn state() -> Rc<TrackerState<MemoryStore>> {
    Rc::new(TrackerState::new(MemoryStore::new(), &TrackerConfig::default()))
}

fn contests() -> Vec<Value> {
    let now = Utc::now();
    serde_json::from_value(json!([
        {
            "id": "cf-1",
            "name": "Codeforces Round",
            "url": "https://codeforces.com/contest/1",
            "platform": "codeforces",
            "startTime": (now + Duration::hours(2)).to_rfc3339(),
            "duration": 7200
        },
        {
            "id": "lc-1",
            "name": "Weekly Contest",
            "url": "https://leetcode.com/contest/weekly-1",
            "platform": "leetcode",
            "startTime": (now - Duration::hours(3)).to_rfc3339()
        }
    ]))
    .unwrap()
}

fn loaded() -> (Rc<TrackerState<MemoryStore>>, RequestSequencer) {
    let mut sequencer = RequestSequencer::default();
    let ticket = sequencer.next_ticket();
    let state = state()
        .reduce(TrackerAction::FetchStarted(ticket))
        .reduce(TrackerAction::FetchFinished(ticket, Ok(contests())));
    (state, sequencer)
}

#[test]
fn starts_loading_with_all_platforms() {
    let state = state();
    assert_eq!(state.dashboard.status(), &LoadStatus::Loading);
    assert!(state.dashboard.selection().is_all());
}

#[test]
fn fetch_result_populates_views() {
    let (state, _) = loaded();
    assert_eq!(state.dashboard.status(), &LoadStatus::Ready);

    let views = state.dashboard.views(Utc::now());
    assert_eq!(views.counts(), (1, 0, 1));
    assert_eq!(views.upcoming[0].id, "cf-1");
    assert_eq!(views.past[0].id, "lc-1");
}

#[test]
fn superseded_fetch_is_ignored() {
    let mut sequencer = RequestSequencer::default();
    let first = sequencer.next_ticket();
    let second = sequencer.next_ticket();

    let before = state()
        .reduce(TrackerAction::FetchStarted(first))
        .reduce(TrackerAction::FetchStarted(second));
    let after = before
        .clone()
        .reduce(TrackerAction::FetchFinished(first, Ok(contests())));

    assert!(Rc::ptr_eq(&before, &after));
    assert!(after.dashboard.contests().is_empty());
    assert_eq!(after.dashboard.status(), &LoadStatus::Loading);
}

#[test]
fn fetch_failure_shows_banner_and_keeps_contests() {
    let (state, mut sequencer) = loaded();
    let ticket = sequencer.next_ticket();
    let state = state
        .reduce(TrackerAction::FetchStarted(ticket))
        .reduce(TrackerAction::FetchFinished(ticket, Err(SharedError::Fetch("offline".into()))));

    assert_eq!(state.dashboard.error_message(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(state.dashboard.contests().len(), 2);
}

#[test]
fn removing_last_platform_is_rejected() {
    let state = state()
        .reduce(TrackerAction::TogglePlatform(Platform::Codechef))
        .reduce(TrackerAction::TogglePlatform(Platform::Leetcode));
    assert!(state.dashboard.selection().is_locked(Platform::Codeforces));

    let after = state.clone().reduce(TrackerAction::TogglePlatform(Platform::Codeforces));
    assert!(Rc::ptr_eq(&state, &after));
    assert!(after.dashboard.selection().contains(Platform::Codeforces));

    let after = after.reduce(TrackerAction::SelectAllPlatforms);
    assert!(after.dashboard.selection().is_all());
}

#[test]
fn platform_filter_narrows_views() {
    let (state, _) = loaded();
    let state = state.reduce(TrackerAction::TogglePlatform(Platform::Leetcode));
    let views = state.dashboard.views(Utc::now());
    assert_eq!(views.counts(), (1, 0, 0));
}

#[test]
fn bookmark_toggle_persists_to_storage() {
    let store = MemoryStore::new();
    let config = TrackerConfig::default();
    let state = Rc::new(TrackerState::new(store.clone(), &config))
        .reduce(TrackerAction::ToggleBookmark("cf-1".into()));

    assert!(state.dashboard.is_bookmarked("cf-1"));
    assert_eq!(
        store.get_item(StorageKey::Bookmarks.as_str()).unwrap(),
        Some(r#"["cf-1"]"#.to_string())
    );

    let reloaded = TrackerState::new(store, &config);
    assert!(reloaded.dashboard.is_bookmarked("cf-1"));
}

#[test]
fn bookmarked_tab_only_lists_upcoming() {
    let (state, _) = loaded();
    let state = state
        .reduce(TrackerAction::ToggleBookmark("cf-1".into()))
        .reduce(TrackerAction::ToggleBookmark("lc-1".into()));
    let views = state.dashboard.views(Utc::now());
    assert_eq!(views.counts(), (1, 1, 1));
    assert_eq!(views.bookmarked_upcoming[0].id, "cf-1");
}

#[test]
fn stale_remote_bookmarks_are_dropped() {
    let mut sequencer = RequestSequencer::default();
    let first = sequencer.next_ticket();
    let second = sequencer.next_ticket();

    let state = state()
        .reduce(TrackerAction::ToggleBookmark("a".into()))
        .reduce(TrackerAction::BookmarkSyncStarted(first, "a".into()))
        .reduce(TrackerAction::ToggleBookmark("b".into()))
        .reduce(TrackerAction::BookmarkSyncStarted(second, "b".into()))
        .reduce(TrackerAction::RemoteBookmarksSynced(first, vec!["a".into()]));
    assert!(state.dashboard.is_bookmarked("b"));

    let state = state.reduce(TrackerAction::RemoteBookmarksSynced(
        second,
        vec!["a".into(), "b".into(), "c".into()],
    ));
    assert!(state.dashboard.is_bookmarked("c"));
}

#[test]
fn startup_merge_unions_remote_bookmarks() {
    let state = state()
        .reduce(TrackerAction::ToggleBookmark("local".into()))
        .reduce(TrackerAction::RemoteBookmarksFetched(vec!["remote".into(), "local".into()]));
    assert!(state.dashboard.is_bookmarked("local"));
    assert!(state.dashboard.is_bookmarked("remote"));
    assert_eq!(state.dashboard.bookmarks().len(), 2);

    let unchanged = state.clone().reduce(TrackerAction::RemoteBookmarksFetched(vec!["remote".into()]));
    assert!(Rc::ptr_eq(&state, &unchanged));
}

#[test]
fn bookmarks_use_configured_storage_key() {
    let store = MemoryStore::new();
    let config = TrackerConfig {
        bookmarks_key: "tracker.bookmarks".into(),
        ..TrackerConfig::default()
    };
    store.set_item("tracker.bookmarks", r#"["cf-9"]"#).unwrap();

    let state = Rc::new(TrackerState::new(store.clone(), &config))
        .reduce(TrackerAction::ToggleBookmark("cf-1".into()));

    assert!(state.dashboard.is_bookmarked("cf-9"));
    assert_eq!(
        store.get_item("tracker.bookmarks").unwrap(),
        Some(r#"["cf-9","cf-1"]"#.to_string())
    );
    assert_eq!(store.get_item(StorageKey::Bookmarks.as_str()).unwrap(), None);
}

#[test]
fn bookmark_kept_locally_survives_a_later_successful_sync() {
    let mut sequencer = RequestSequencer::default();
    let failed = sequencer.next_ticket();
    let succeeded = sequencer.next_ticket();

    // The first push fails, so no remote set is ever dispatched for it.
    let state = state()
        .reduce(TrackerAction::ToggleBookmark("a".into()))
        .reduce(TrackerAction::BookmarkSyncStarted(failed, "a".into()))
        .reduce(TrackerAction::ToggleBookmark("b".into()))
        .reduce(TrackerAction::BookmarkSyncStarted(succeeded, "b".into()))
        .reduce(TrackerAction::RemoteBookmarksSynced(succeeded, vec!["b".into()]));

    assert!(state.dashboard.is_bookmarked("a"));
    assert!(state.dashboard.is_bookmarked("b"));
    assert_eq!(state.dashboard.bookmarks().len(), 2);
}
