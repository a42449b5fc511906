//! API client error types

use reqwest::StatusCode;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by API calls.
///
/// The taxonomy is flat on purpose: callers show the message and move on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, connect, timeout, TLS
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response.
    ///
    /// Anonymous requests surface a 401 here too (a failed login, for one).
    /// Bearer requests report an unrecoverable 401 as `Unauthorized` instead.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Authentication failed and could not be recovered by a token refresh
    #[error("Unauthorized. Please login again.")]
    Unauthorized,

    /// A URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Direct-to-storage upload failed
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Token storage failed
    #[error("Token storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Build a server error from a non-2xx status and its body.
    ///
    /// Uses the body's `detail` or `error` string when present.
    pub fn from_response_body(status: StatusCode, body: &[u8]) -> Self {
        let message = extract_error_message(body)
            .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));
        Self::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
