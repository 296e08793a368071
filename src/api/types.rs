//! API request and response types

use crate::backend::ChatMessage;
use crate::render::RenderPlan;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat turn posted by the page; the page owns the full history
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Assistant reply plus its render plan
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<Value>>,
    pub plan: RenderPlan,
}

/// Request to plan arbitrary assistant text
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub content: String,
}

/// Response for render planning
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub plan: RenderPlan,
}

/// Welcome-screen prompts
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
