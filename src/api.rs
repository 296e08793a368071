//! HTTP API for the chat front-end
//!
//! Serves the chat page, relays turns to the backend and returns each
//! reply together with its render plan.

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::backend::ChatBackend;
use std::sync::Arc;

/// Application state shared across handlers
///
/// Holds no conversation state: the page sends its full history with
/// every turn.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ChatBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }
}
