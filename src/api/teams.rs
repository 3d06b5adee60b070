use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}

/// Sorted union of home and away team names; the selection-list feed.
pub async fn get_teams(State(state): State<AppState>) -> Json<TeamsResponse> {
    let dataset = state.dataset().await;
    let teams = dataset
        .matches
        .team_set()
        .into_iter()
        .map(|t| t.0)
        .collect();
    Json(TeamsResponse { teams })
}
