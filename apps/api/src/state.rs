use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream text completion. `GeminiClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionClient>,
}
