//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every call site receives an `ApiError` and turns it into one inline
//! message via [`ApiError::user_message`]. Nothing here retries. A 401 is
//! surfaced as `Unauthorized` after the client has already cleared the
//! session and redirected.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ErrorBody;
use super::upload::UploadRejection;

pub const NETWORK_MESSAGE: &str = "Cannot reach the server. Check your network connection.";
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Failure below HTTP: nothing usable came back.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
}

/// Any failure a REST call can produce.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Rejected(#[from] UploadRejection),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(detail) => Self::Network(detail),
            TransportError::Timeout => Self::Timeout,
        }
    }
}

impl ApiError {
    /// Build a status error from a non-2xx response, keeping the server's
    /// `message` when the body carries one.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// Text to show next to the control that triggered the request.
    ///
    /// Server-provided messages win, then the fixed transport texts, then
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Network(_) => NETWORK_MESSAGE.to_owned(),
            Self::Timeout => TIMEOUT_MESSAGE.to_owned(),
            Self::Unauthorized => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Rejected(rejection) => rejection.to_string(),
            Self::Status { message: None, .. } | Self::Decode(_) => fallback.to_owned(),
        }
    }
}
