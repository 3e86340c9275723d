use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every API endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, message: impl Into<String>, result: Option<T>) -> Self {
        Self { status_code, message: message.into(), result }
    }

    pub fn with_result(status_code: u16, message: impl Into<String>, result: T) -> Self {
        Self::new(status_code, message, Some(result))
    }

    pub fn message_only(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, message, None)
    }
}
