use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. Deliberately does not touch the storage backend.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
