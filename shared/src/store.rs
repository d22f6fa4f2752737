use crate::dto::contest::ContestDto;
use crate::models::contest::Contest;
use crate::{Result, SharedError};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;

/// The most recently accepted contest list, in fetch order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContestStore {
    contests: Vec<Contest>,
}

impl ContestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a whole batch of raw JSON records and replaces the current list with it.
    ///
    /// Each record is decoded on its own, so a wrongly typed field is reported
    /// against its index like any other invalid record. Any invalid record (or
    /// a repeated id) rejects the batch and leaves the store exactly as it was.
    pub fn load(&mut self, raw: Vec<Value>) -> Result<&[Contest]> {
        let total = raw.len();
        let mut seen = HashSet::with_capacity(total);
        let mut validated = Vec::with_capacity(total);

        for (index, value) in raw.into_iter().enumerate() {
            let contest = serde_json::from_value::<ContestDto>(value)
                .map_err(|e| e.to_string())
                .and_then(ContestDto::into_contest)
                .map_err(|reason| {
                    warn!("Rejecting contest batch of {}: record {}: {}", total, index, reason);
                    SharedError::InvalidContest { index, reason }
                })?;
            if !seen.insert(contest.id.clone()) {
                warn!("Rejecting contest batch of {}: duplicate id {}", total, contest.id);
                return Err(SharedError::InvalidContest {
                    index,
                    reason: format!("duplicate id '{}'", contest.id),
                });
            }
            validated.push(contest);
        }

        debug!("Contest store replaced: {} -> {} contests", self.contests.len(), validated.len());
        self.contests = validated;
        Ok(&self.contests)
    }

    pub fn contests(&self) -> &[Contest] {
        &self.contests
    }

    pub fn get(&self, id: &str) -> Option<&Contest> {
        self.contests.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }
}
