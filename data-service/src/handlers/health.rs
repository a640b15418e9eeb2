use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Ping only when a connection is cached; health must not block on a
    // connect attempt
    let database = match state.db.get() {
        Some(db) => match db.ping().await {
            Ok(_) => "healthy",
            Err(_) => "unhealthy",
        },
        None => "unhealthy",
    };

    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "database": database,
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}
