use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::{
    BookmarkListResponse, BookmarkRemote, ErrorResponse, SharedError, ToggleBookmarkRequest,
    TrackerConfig,
};

/// Flips a bookmark on the server and returns the identity's full set.
pub async fn toggle_bookmark(
    config: &TrackerConfig,
    request: &ToggleBookmarkRequest,
) -> Result<Vec<String>, SharedError> {
    debug!("Toggling remote bookmark {}", request.contest_id);

    let response = Request::post(&config.bookmarks_url())
        .json(request)
        .map_err(|e| SharedError::BookmarkSync(format!("Failed to serialize bookmark toggle: {}", e)))?
        .send()
        .await
        .map_err(|e| SharedError::BookmarkSync(format!("Failed to send bookmark toggle: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let detail = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "Failed to toggle bookmark".to_string());
        return Err(SharedError::BookmarkSync(format!("HTTP {}: {}", status, detail)));
    }

    let body = response
        .json::<BookmarkListResponse>()
        .await
        .map_err(|e| SharedError::BookmarkSync(format!("Failed to parse bookmark response: {}", e)))?;
    Ok(body.bookmarked_contests)
}

/// Fetches the identity's remote bookmark set.
pub async fn get_bookmarked_contests(
    config: &TrackerConfig,
    email: &str,
) -> Result<Vec<String>, SharedError> {
    let response = Request::get(&config.bookmarks_for_url(email))
        .send()
        .await
        .map_err(|e| SharedError::BookmarkSync(format!("Failed to fetch bookmarks: {}", e)))?;

    if !response.ok() {
        return Err(SharedError::BookmarkSync(format!(
            "Failed to fetch bookmarks: HTTP {}",
            response.status()
        )));
    }

    let body = response
        .json::<BookmarkListResponse>()
        .await
        .map_err(|e| SharedError::BookmarkSync(format!("Failed to parse bookmarks: {}", e)))?;
    debug!("Fetched {} remote bookmarks", body.bookmarked_contests.len());
    Ok(body.bookmarked_contests)
}

/// [`BookmarkRemote`] over the tracker's HTTP bookmark endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBookmarkRemote {
    config: TrackerConfig,
}

impl HttpBookmarkRemote {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl BookmarkRemote for HttpBookmarkRemote {
    async fn toggle_bookmark(&self, request: &ToggleBookmarkRequest) -> shared::Result<Vec<String>> {
        toggle_bookmark(&self.config, request).await
    }

    async fn fetch_bookmarks(&self, email: &str) -> shared::Result<Vec<String>> {
        get_bookmarked_contests(&self.config, email).await
    }
}
