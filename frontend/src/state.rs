use crate::storage::LocalStorageBackend;
use log::{debug, info};
use serde_json::Value;
use shared::{BookmarkManager, Dashboard, KeyValueStore, Platform, RequestTicket, SharedError, TrackerConfig};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug)]
pub enum TrackerAction {
    FetchStarted(RequestTicket),
    FetchFinished(RequestTicket, Result<Vec<Value>, SharedError>),
    TogglePlatform(Platform),
    SelectAllPlatforms,
    ToggleBookmark(String),
    BookmarkSyncStarted(RequestTicket, String),
    RemoteBookmarksSynced(RequestTicket, Vec<String>),
    RemoteBookmarksFetched(Vec<String>),
}

/// Reducer state behind the tracker page
#[derive(Clone, Debug)]
pub struct TrackerState<S> {
    pub dashboard: Dashboard<S>,
}

pub type AppState = TrackerState<LocalStorageBackend>;

impl<S: KeyValueStore> TrackerState<S> {
    /// Loads persisted bookmarks from the configured key.
    pub fn new(storage: S, config: &TrackerConfig) -> Self {
        let bookmarks = BookmarkManager::load_with_key(storage, &config.bookmarks_key);
        Self {
            dashboard: Dashboard::from_bookmarks(bookmarks),
        }
    }
}

impl<S: KeyValueStore + Clone + 'static> Reducible for TrackerState<S> {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TrackerAction::FetchStarted(ticket) => {
                next.dashboard.begin_fetch(ticket);
            }
            TrackerAction::FetchFinished(ticket, result) => {
                if !next.dashboard.apply_fetch(ticket, result) {
                    return self;
                }
            }
            TrackerAction::TogglePlatform(platform) => {
                if let Err(e) = next.dashboard.toggle_platform(platform) {
                    debug!("{}", e);
                    return self;
                }
            }
            TrackerAction::SelectAllPlatforms => {
                next.dashboard.select_all_platforms();
            }
            TrackerAction::ToggleBookmark(contest_id) => {
                next.dashboard.toggle_bookmark(&contest_id);
            }
            TrackerAction::BookmarkSyncStarted(ticket, contest_id) => {
                next.dashboard.begin_bookmark_sync(ticket, &contest_id);
            }
            TrackerAction::RemoteBookmarksSynced(ticket, ids) => {
                if !next.dashboard.apply_remote_bookmarks(ticket, ids) {
                    return self;
                }
            }
            TrackerAction::RemoteBookmarksFetched(ids) => {
                let added = next.dashboard.merge_remote_bookmarks(ids);
                if added == 0 {
                    return self;
                }
                info!("Merged {} remote bookmarks", added);
            }
        }
        Rc::new(next)
    }
}
