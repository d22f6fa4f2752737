use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of the remote bookmark toggle call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBookmarkRequest {
    /// Identity the remote bookmark set is keyed by
    #[validate(email(message = "Bookmark identity must be a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Contest id must not be empty"))]
    pub contest_id: String,
}

impl ToggleBookmarkRequest {
    pub fn new(email: impl Into<String>, contest_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            contest_id: contest_id.into(),
        }
    }
}

/// Full bookmark set for one identity, as returned by both remote endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkListResponse {
    #[serde(default)]
    pub bookmarked_contests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let req = ToggleBookmarkRequest::new("ada@example.com", "cf-1900");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "ada@example.com", "contestId": "cf-1900"})
        );
    }

    #[test]
    fn test_request_validation() {
        assert!(ToggleBookmarkRequest::new("ada@example.com", "cf-1").validate().is_ok());
        assert!(ToggleBookmarkRequest::new("not-an-email", "cf-1").validate().is_err());
        assert!(ToggleBookmarkRequest::new("ada@example.com", "").validate().is_err());
    }

    #[test]
    fn test_response_parses() {
        let resp: BookmarkListResponse =
            serde_json::from_str(r#"{"bookmarkedContests":["a","b"]}"#).unwrap();
        assert_eq!(resp.bookmarked_contests, vec!["a", "b"]);
    }
}
