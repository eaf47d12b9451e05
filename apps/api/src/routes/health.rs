use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Setu AI Recommendation Service";

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// GET /
/// Lists the available operations.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "recommendations": "/recommendations",
            "resume-analysis": "/resume-analysis",
            "health": "/health"
        }
    }))
}
