use crate::models::platform::Platform;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid contest record at index {index}: {reason}")]
    InvalidContest { index: usize, reason: String },

    #[error("Bookmark sync error: {0}")]
    BookmarkSync(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Rejected: minimum one platform required ({0} is the only selection)")]
    MinimumOnePlatform(Platform),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_contest_message_names_index() {
        let err = SharedError::InvalidContest {
            index: 3,
            reason: "missing platform".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid contest record at index 3: missing platform"
        );
    }

    #[test]
    fn test_json_error_converts_to_conversion() {
        let err: SharedError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }
}
