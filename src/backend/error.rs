//! Backend relay error types

use thiserror::Error;

/// Shown when the backend rejects a request without saying why
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to get response from backend";

/// Relay error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    /// HTTP status returned by the backend, when it answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Decode, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Config, message)
    }

    /// Non-2xx answer; `message` is the backend's own explanation
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: BackendErrorKind::Http,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Build an HTTP error from a failed response body.
    ///
    /// Uses the body's `detail` field when present, otherwise the default
    /// failure message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned())
            .and_then(|detail| match detail {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) if s.is_empty() => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            });

        Self::http(
            status,
            detail.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        )
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Connection refused, timeout, reset
    Network,
    /// Backend answered with a non-success status
    Http,
    /// Backend answered 2xx but the body was not a chat reply
    Decode,
    /// HTTP client could not be built
    Config,
}
