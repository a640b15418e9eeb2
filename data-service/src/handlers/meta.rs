use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn service_status(State(state): State<AppState>) -> impl IntoResponse {
    let database = if state.db.is_connected() {
        "connected"
    } else {
        "disconnected"
    };

    Json(json!({
        "message": "Data Manager API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "endpoints": {
            "addData": "POST /api/data",
            "fetchData": "GET /api/data",
            "health": "GET /health"
        }
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Endpoint not found"
        })),
    )
}
