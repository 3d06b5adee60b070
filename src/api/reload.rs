use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub match_rows: usize,
    pub player_rows: usize,
}

/// Re-read the source files and swap the shared dataset. In-flight queries
/// keep the snapshot they already took.
pub async fn post_reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let fresh = state.source.load_dataset().await?;
    let response = ReloadResponse {
        match_rows: fresh.matches.len(),
        player_rows: fresh.players.len(),
    };

    *state.dataset.write().await = fresh;
    tracing::info!(
        "dataset reloaded: {} matches, {} player rows",
        response.match_rows,
        response.player_rows
    );

    Ok(Json(response))
}
