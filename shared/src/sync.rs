//! Best-effort synchronisation of bookmarks with a remote service.
//!
//! The local bookmark set is always updated first; the remote side is
//! reconciled afterwards and its failures only ever produce warnings.

use crate::dto::bookmark::ToggleBookmarkRequest;
use crate::{Result, SharedError};
use async_trait::async_trait;
use log::{debug, warn};
use validator::{validate_email, Validate};

/// Remote toggle is attempted this many times before falling back to local state.
pub const MAX_TOGGLE_ATTEMPTS: usize = 2;

/// Remote bookmark service keyed by an email identity.
#[async_trait(?Send)]
pub trait BookmarkRemote {
    /// Flips a bookmark remotely and returns the identity's full updated set.
    async fn toggle_bookmark(&self, request: &ToggleBookmarkRequest) -> Result<Vec<String>>;

    /// Returns the identity's full bookmark set.
    async fn fetch_bookmarks(&self, email: &str) -> Result<Vec<String>>;
}

/// How a remote toggle ended
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Remote accepted the toggle; this is its authoritative set.
    Synced(Vec<String>),
    /// Remote failed on every attempt; local state stays in charge.
    LocalOnly(SharedError),
}

/// Validated email identity used as the remote bookmark key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkIdentity(String);

impl BookmarkIdentity {
    pub fn parse(email: &str) -> Result<Self> {
        let email = email.trim();
        if validate_email(email) {
            Ok(Self(email.to_string()))
        } else {
            Err(SharedError::InvalidEmail(email.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Sends a toggle to the remote, retrying once before giving up.
pub async fn push_toggle<R>(remote: &R, identity: &BookmarkIdentity, contest_id: &str) -> SyncOutcome
where
    R: BookmarkRemote + ?Sized,
{
    let request = ToggleBookmarkRequest::new(identity.as_str(), contest_id);
    if let Err(e) = request.validate() {
        return SyncOutcome::LocalOnly(SharedError::from(e));
    }

    let mut last_error = SharedError::BookmarkSync("no attempt made".to_string());
    for attempt in 1..=MAX_TOGGLE_ATTEMPTS {
        match remote.toggle_bookmark(&request).await {
            Ok(ids) => {
                debug!("Remote bookmark toggle for {} synced on attempt {}", contest_id, attempt);
                return SyncOutcome::Synced(ids);
            }
            Err(e) => {
                warn!(
                    "Remote bookmark toggle for {} failed (attempt {}/{}): {}",
                    contest_id, attempt, MAX_TOGGLE_ATTEMPTS, e
                );
                last_error = match e {
                    SharedError::BookmarkSync(_) => e,
                    other => SharedError::BookmarkSync(other.to_string()),
                };
            }
        }
    }
    SyncOutcome::LocalOnly(last_error)
}

/// Fetches the remote set; any failure degrades to an empty list.
pub async fn pull_bookmarks<R>(remote: &R, identity: &BookmarkIdentity) -> Vec<String>
where
    R: BookmarkRemote + ?Sized,
{
    match remote.fetch_bookmarks(identity.as_str()).await {
        Ok(ids) => {
            debug!("Fetched {} remote bookmarks", ids.len());
            ids
        }
        Err(e) => {
            warn!("Error fetching remote bookmarks: {}", e);
            Vec::new()
        }
    }
}
