//! HTTP request handlers

use super::assets::{get_index_html, serve_static};
use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, RenderRequest, RenderResponse, SuggestionsResponse,
};
use super::AppState;
use crate::backend::{BackendError, BackendErrorKind};
use crate::render::build_render_plan;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Prompts offered on the empty chat screen
const SUGGESTIONS: [&str; 3] = [
    "What's the current price of AAPL?",
    "Show me the stock information for MSFT",
    "What's the weather forecast for London?",
];

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the chat page
        .route("/", get(serve_page))
        // Static assets (embedded or filesystem fallback)
        .route("/assets/*path", get(serve_static))
        // Chat relay
        .route("/api/chat", post(send_chat))
        // Render planning for arbitrary text
        .route("/api/render", post(render_content))
        .route("/api/suggestions", get(list_suggestions))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Page
// ============================================================

async fn serve_page() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - chat page not found in ui/dist</h1>".to_string()),
        )
            .into_response(),
    }
}

// ============================================================
// Chat
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.messages.is_empty() {
        return Err(AppError::BadRequest("messages must not be empty".to_string()));
    }

    let reply = state.backend.complete(&req.messages).await?;
    let plan = build_render_plan(&reply.content);

    tracing::debug!(
        segments = plan.len(),
        widgets = plan.widgets().count(),
        "Planned assistant reply"
    );

    Ok(Json(ChatResponse {
        role: reply.role,
        content: reply.content,
        tool_calls: reply.tool_calls,
        plan,
    }))
}

async fn render_content(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse {
        plan: build_render_plan(&req.content),
    })
}

async fn list_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: SUGGESTIONS.to_vec(),
    })
}

async fn get_version() -> &'static str {
    concat!("genui-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Backend(BackendError),
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        AppError::Backend(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // The backend's own status and reason pass through unchanged
            AppError::Backend(BackendError {
                kind: BackendErrorKind::Http,
                status: Some(code),
                message,
            }) => (
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            AppError::Backend(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
