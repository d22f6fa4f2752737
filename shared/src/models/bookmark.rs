use serde::{Deserialize, Serialize};

/// Bookmarked contest ids in insertion order, without duplicates.
///
/// Serialized as a plain JSON array of strings, which is also the
/// persisted form under the bookmark storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, contest_id: &str) -> bool {
        self.ids.iter().any(|id| id == contest_id)
    }

    /// Flips membership and returns whether the id is now bookmarked.
    pub fn toggle(&mut self, contest_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == contest_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(contest_id.to_string());
            true
        }
    }

    /// Adds ids that are not already present; returns how many were new.
    pub fn extend_missing<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.ids.len();
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
        self.ids.len() - before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<String>> for BookmarkSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<BookmarkSet> for Vec<String> {
    fn from(set: BookmarkSet) -> Self {
        set.ids
    }
}

impl FromIterator<String> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = BookmarkSet::new();
        set.extend_missing(iter);
        set
    }
}
