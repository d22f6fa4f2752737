use crate::models::platform::Platform;
use crate::{Result, SharedError};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single scheduled contest on one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    /// Platform-assigned identifier, stable across fetches
    #[validate(length(min = 1, message = "Contest id must not be empty"))]
    pub id: String,

    /// Display name
    pub name: String,

    /// Link to the contest page
    pub url: String,

    /// Hosting platform
    pub platform: Platform,

    /// Scheduled start (UTC)
    pub start_time: DateTime<Utc>,

    /// Scheduled end (UTC), if the platform reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Contest {
    /// Creates a new contest with validation
    pub fn new(
        id: String,
        name: String,
        url: String,
        platform: Platform,
        start_time: DateTime<Utc>,
    ) -> Result<Self> {
        let contest = Self {
            id,
            name,
            url,
            platform,
            start_time,
            end_time: None,
            duration: None,
        };
        contest.validate_fields()?;
        Ok(contest)
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Some(seconds);
        self
    }

    fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    /// Upcoming means strictly after `now`; a contest starting exactly at `now` has started.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }

    /// Duration rounded to the nearest whole minute
    pub fn duration_minutes(&self) -> Option<u64> {
        self.duration.map(|secs| (secs + 30) / 60)
    }
}

/// Parses a wire timestamp. RFC 3339 first; an offset-less ISO date-time is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}
