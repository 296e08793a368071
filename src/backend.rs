//! Chat backend relay
//!
//! The backend owns the agent and its tools; this side only forwards the
//! conversation and hands back the assistant's reply. One attempt per
//! user action, no retries.

mod error;
mod http;
mod types;

pub use error::{BackendError, BackendErrorKind};
pub use http::HttpBackend;
pub use types::ChatMessage;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/chat";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where and how to reach the backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("GENUI_BACKEND_URL").unwrap_or(defaults.url),
            timeout: std::env::var("GENUI_BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.timeout, Duration::from_secs),
        }
    }
}

/// Anything that can answer a conversation with one assistant message
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, BackendError>;

    /// Human-readable target, for logs
    fn endpoint(&self) -> &str;
}

/// Logging wrapper for chat backends
pub struct LoggingBackend {
    inner: Arc<dyn ChatBackend>,
}

impl LoggingBackend {
    pub fn new(inner: Arc<dyn ChatBackend>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ChatBackend for LoggingBackend {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(messages).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    history = messages.len(),
                    reply_len = reply.content.len(),
                    "Backend request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    status = ?e.status,
                    kind = ?e.kind,
                    error = %e.message,
                    "Backend request failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}
