use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns a simple status object with the API version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "AI Resume Analyzer Backend API",
        "version": "1.0.0"
    }))
}
