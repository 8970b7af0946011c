pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs/search", post(handlers::handle_search_jobs))
        // Legacy paths kept for existing frontends
        .route("/search-jobs", post(handlers::handle_search_jobs))
        .route("/match_jobs", post(handlers::handle_search_jobs))
        .with_state(state)
}
