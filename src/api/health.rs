use axum::extract::State;
use axum::Json;

use crate::api::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Readiness reports the loaded dataset size, so an accidentally empty load
/// is visible to operators without querying the data endpoints.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let dataset = state.dataset().await;
    Json(serde_json::json!({
        "status": "ready",
        "matchRows": dataset.matches.len(),
        "playerRows": dataset.players.len(),
    }))
}
