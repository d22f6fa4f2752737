use crate::models::contest::{parse_timestamp, Contest};
use crate::models::platform::Platform;
use serde::{Deserialize, Serialize};

/// Contest record as it arrives from the listing endpoint.
///
/// Every field is optional so a record with missing fields still deserializes
/// and can be rejected with a precise reason by [`ContestDto::into_contest`].
/// Wrongly typed fields fail deserialization instead; the store decodes each
/// record separately so that failure is also tied to the record's index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl ContestDto {
    /// Validates the record, returning the reason it was rejected on failure.
    pub fn into_contest(self) -> Result<Contest, String> {
        let id = self.id.ok_or_else(|| "missing id".to_string())?;

        let platform = self
            .platform
            .ok_or_else(|| format!("contest '{}' is missing platform", id))?
            .parse::<Platform>()
            .map_err(|e| format!("contest '{}': {}", id, e))?;

        let raw_start = self
            .start_time
            .ok_or_else(|| format!("contest '{}' is missing startTime", id))?;
        let start_time = parse_timestamp(&raw_start)
            .ok_or_else(|| format!("contest '{}' has unparseable startTime '{}'", id, raw_start))?;

        let end_time = match self.end_time {
            Some(raw_end) => Some(parse_timestamp(&raw_end).ok_or_else(|| {
                format!("contest '{}' has unparseable endTime '{}'", id, raw_end)
            })?),
            None => None,
        };

        let duration = match self.duration {
            Some(secs) => Some(
                u64::try_from(secs)
                    .map_err(|_| format!("contest '{}' has negative duration {}", id, secs))?,
            ),
            None => None,
        };

        let mut contest = Contest::new(
            id,
            self.name.unwrap_or_default(),
            self.url.unwrap_or_default(),
            platform,
            start_time,
        )
        .map_err(|e| e.to_string())?;
        if let Some(end_time) = end_time {
            contest = contest.with_end_time(end_time);
        }
        if let Some(duration) = duration {
            contest = contest.with_duration(duration);
        }
        Ok(contest)
    }
}
