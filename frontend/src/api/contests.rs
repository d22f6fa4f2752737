use gloo_net::http::Request;
use log::debug;
use serde_json::Value;
use shared::{SharedError, TrackerConfig};

/// Fetches the raw contest list. Records are decoded and validated later by the store.
pub async fn fetch_contests(config: &TrackerConfig) -> Result<Vec<Value>, SharedError> {
    let url = config.contests_url();
    debug!("Fetching contests from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| SharedError::Fetch(format!("Failed to fetch contests: {}", e)))?;

    if !response.ok() {
        return Err(SharedError::Fetch(format!(
            "Failed to fetch contests: HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let contests = response
        .json::<Vec<Value>>()
        .await
        .map_err(|e| SharedError::Fetch(format!("Failed to parse contests response: {}", e)))?;

    debug!("Successfully fetched {} contest records", contests.len());
    Ok(contests)
}
