use serde::{Deserialize, Serialize};

/// Error body some contest APIs return alongside a non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    #[serde(alias = "message")]
    pub error: String,
}
