use std::sync::Arc;

use crate::jobs::matcher::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider clients plus the process-wide embedding model, read-only after startup.
    pub matcher: Arc<JobMatcher>,
}
