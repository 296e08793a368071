//! HTTP relay to the chat backend

use super::types::{BackendRequest, BackendResponse, ChatMessage};
use super::{BackendConfig, BackendError, ChatBackend};
use async_trait::async_trait;
use reqwest::Client;

/// Posts the conversation to the backend's chat endpoint
pub struct HttpBackend {
    client: Client,
    url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            // The backend is a locally addressed service
            .no_proxy()
            .build()
            .map_err(|e| BackendError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, BackendError> {
        let response = self
            .client
            .post(&self.url)
            .json(&BackendRequest { messages })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    BackendError::network(format!("Connection failed: {e}"))
                } else {
                    BackendError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(BackendError::from_response(status.as_u16(), &body));
        }

        let parsed: BackendResponse = serde_json::from_str(&body)
            .map_err(|e| BackendError::decode(format!("Failed to parse response: {e} - body: {body}")))?;

        Ok(parsed.message)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
