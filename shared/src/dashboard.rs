use crate::bookmarks::BookmarkManager;
use crate::classifier::{classify, ContestViews};
use crate::filter::{PlatformSelection, PlatformToggle};
use crate::models::bookmark::BookmarkSet;
use crate::models::contest::Contest;
use crate::models::platform::Platform;
use crate::storage::KeyValueStore;
use crate::store::ContestStore;
use crate::classifier::classify_now;
use crate::Result;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::BTreeSet;

/// Banner text shown when the contest list cannot be fetched
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch contests. Please try again later.";

/// Where the contest list currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one asynchronous request; later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Issues monotonically increasing tickets.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn next_ticket(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }
}

/// All client-side tracker state: contests, platform filter and bookmarks.
///
/// Mutated only through the methods below. Asynchronous results carry the
/// ticket of the request that produced them and are dropped once a newer
/// request of the same kind has started.
///
/// Local bookmarks stay authoritative. Ids toggled locally are tracked as
/// unsynced until a remote set agrees with them, and remote sets never
/// override an unsynced id.
#[derive(Debug, Clone)]
pub struct Dashboard<S> {
    store: ContestStore,
    selection: PlatformSelection,
    bookmarks: BookmarkManager<S>,
    status: LoadStatus,
    latest_fetch: Option<RequestTicket>,
    latest_bookmark_sync: Option<RequestTicket>,
    unsynced: BTreeSet<String>,
}

impl<S: KeyValueStore> Dashboard<S> {
    pub fn new(storage: S) -> Self {
        Self::from_bookmarks(BookmarkManager::load(storage))
    }

    pub fn from_bookmarks(bookmarks: BookmarkManager<S>) -> Self {
        Self {
            store: ContestStore::new(),
            selection: PlatformSelection::all(),
            bookmarks,
            status: LoadStatus::Loading,
            latest_fetch: None,
            latest_bookmark_sync: None,
            unsynced: BTreeSet::new(),
        }
    }

    /// Marks a contest fetch as in flight; it supersedes any earlier one.
    pub fn begin_fetch(&mut self, ticket: RequestTicket) {
        self.latest_fetch = Some(self.latest_fetch.map_or(ticket, |t| t.max(ticket)));
        self.status = LoadStatus::Loading;
    }

    /// Applies the outcome of a fetch. Returns false if the result was stale.
    pub fn apply_fetch(&mut self, ticket: RequestTicket, result: Result<Vec<Value>>) -> bool {
        if self.latest_fetch != Some(ticket) {
            debug!("Dropping superseded contest fetch {:?} (latest {:?})", ticket, self.latest_fetch);
            return false;
        }

        self.status = match result {
            Ok(raw) => match self.store.load(raw) {
                Ok(contests) => {
                    info!("Loaded {} contests", contests.len());
                    LoadStatus::Ready
                }
                Err(e) => {
                    warn!("Contest batch rejected, keeping {} previous contests: {}", self.store.len(), e);
                    LoadStatus::Failed(e.to_string())
                }
            },
            Err(e) => {
                warn!("Error fetching contests: {}", e);
                LoadStatus::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn toggle_platform(&mut self, platform: Platform) -> Result<PlatformToggle> {
        self.selection.toggle(platform)
    }

    pub fn select_all_platforms(&mut self) {
        self.selection.select_all();
    }

    /// Local, persisted toggle. Returns whether the contest is now bookmarked.
    pub fn toggle_bookmark(&mut self, contest_id: &str) -> bool {
        self.bookmarks.toggle(contest_id)
    }

    /// Records that a remote toggle of `contest_id` is in flight.
    pub fn begin_bookmark_sync(&mut self, ticket: RequestTicket, contest_id: &str) {
        self.latest_bookmark_sync =
            Some(self.latest_bookmark_sync.map_or(ticket, |t| t.max(ticket)));
        self.unsynced.insert(contest_id.to_string());
    }

    /// Reconciles with the set a remote toggle returned, unless a newer toggle has started.
    ///
    /// Remote-only ids are adopted except where an unsynced local toggle says
    /// otherwise. Local ids are never dropped.
    pub fn apply_remote_bookmarks(&mut self, ticket: RequestTicket, ids: Vec<String>) -> bool {
        if self.latest_bookmark_sync != Some(ticket) {
            debug!("Dropping stale remote bookmark set {:?}", ticket);
            return false;
        }
        let remote: BookmarkSet = ids.into_iter().collect();
        let added = self.merge_remote(&remote);
        let local = self.bookmarks.bookmarks();
        self.unsynced.retain(|id| local.contains(id) != remote.contains(id));
        debug!(
            "Reconciled remote bookmarks: {} adopted, {} still unsynced",
            added,
            self.unsynced.len()
        );
        true
    }

    /// Folds bookmarks fetched at startup into the local set.
    pub fn merge_remote_bookmarks(&mut self, ids: Vec<String>) -> usize {
        let remote: BookmarkSet = ids.into_iter().collect();
        self.merge_remote(&remote)
    }

    fn merge_remote(&mut self, remote: &BookmarkSet) -> usize {
        let adopted: Vec<String> = remote
            .iter()
            .filter(|id| !self.unsynced.contains(*id))
            .map(str::to_string)
            .collect();
        self.bookmarks.merge(adopted)
    }

    /// Classifies the current contests against a single `now`.
    pub fn views(&self, now: DateTime<Utc>) -> ContestViews {
        classify(self.store.contests(), &self.selection, self.bookmarks.bookmarks(), now)
    }

    /// Classifies against the wall clock, read once for all three views.
    pub fn views_now(&self) -> ContestViews {
        classify_now(self.store.contests(), &self.selection, self.bookmarks.bookmarks())
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The banner message, if the last fetch or validation failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn contests(&self) -> &[Contest] {
        self.store.contests()
    }

    pub fn selection(&self) -> &PlatformSelection {
        &self.selection
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        self.bookmarks.bookmarks()
    }

    pub fn is_bookmarked(&self, contest_id: &str) -> bool {
        self.bookmarks.is_bookmarked(contest_id)
    }
}
