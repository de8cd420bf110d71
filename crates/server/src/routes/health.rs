use axum::Json;
use serde_json::{json, Value as JsonValue};

/// GET /
pub async fn root() -> Json<JsonValue> {
    Json(json!({ "message": "Football Analysis API is running!" }))
}

/// GET /health
pub async fn health_check() -> Json<JsonValue> {
    Json(json!({ "status": "ok" }))
}
