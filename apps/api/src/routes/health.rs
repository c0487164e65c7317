use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns service name, version and the current server time.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "template-gallery",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
