use axum::Json;
use serde_json::{json, Value};

use crate::jobs::embedding::EMBEDDING_MODEL;

/// GET /health
/// Returns a simple status object with service version and embedding model.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobmatch-api",
        "embedding_model": EMBEDDING_MODEL
    }))
}
