//! Derives the upcoming, past and bookmarked views shown on the dashboard.
//!
//! Classification is a pure function of its inputs. The caller supplies
//! `now` once per pass so that all three views agree on which side of the
//! boundary each contest falls.

use crate::filter::PlatformSelection;
use crate::models::bookmark::BookmarkSet;
use crate::models::contest::Contest;
use chrono::{DateTime, Utc};

/// The three ordered views produced by one classification pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContestViews {
    /// Starting after `now`, soonest first
    pub upcoming: Vec<Contest>,
    /// Started at or before `now`, most recent first
    pub past: Vec<Contest>,
    /// Bookmarked members of `upcoming`, in the same order
    pub bookmarked_upcoming: Vec<Contest>,
    /// Instant the pass was computed against
    pub now: DateTime<Utc>,
}

impl ContestViews {
    /// Tab label counts: (upcoming, bookmarked, past)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.upcoming.len(), self.bookmarked_upcoming.len(), self.past.len())
    }
}

pub fn classify(
    contests: &[Contest],
    selection: &PlatformSelection,
    bookmarks: &BookmarkSet,
    now: DateTime<Utc>,
) -> ContestViews {
    let (mut upcoming, mut past): (Vec<Contest>, Vec<Contest>) = contests
        .iter()
        .filter(|c| selection.contains(c.platform))
        .cloned()
        .partition(|c| c.is_upcoming(now));

    // Both sorts are stable, so equal start times keep fetch order.
    upcoming.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    past.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    let bookmarked_upcoming = upcoming
        .iter()
        .filter(|c| bookmarks.contains(&c.id))
        .cloned()
        .collect();

    ContestViews {
        upcoming,
        past,
        bookmarked_upcoming,
        now,
    }
}

/// Classifies against the current wall clock, read exactly once.
pub fn classify_now(
    contests: &[Contest],
    selection: &PlatformSelection,
    bookmarks: &BookmarkSet,
) -> ContestViews {
    classify(contests, selection, bookmarks, Utc::now())
}
