use http::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Response parsing failed: {0}")]
    ParseFailed(String),
    #[error("API error (status {status}): {message}")]
    Status { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
