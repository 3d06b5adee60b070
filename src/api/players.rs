use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::TeamName;
use crate::engine::{aggregate_versus, top_by_assists, top_by_goals, PlayerTotals};
use crate::error::AppError;

const DEFAULT_TOP: usize = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersVersusParams {
    pub team: String,
    pub opponent: String,
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersVersusResponse {
    pub team: String,
    pub opponent: String,
    pub players: Vec<PlayerTotals>,
    pub top_by_goals: Vec<PlayerTotals>,
    pub top_by_assists: Vec<PlayerTotals>,
}

/// Aggregated player contributions for `team` against `opponent`, plus the
/// top-N chart feeds. Unknown pairings yield empty lists, not errors.
pub async fn get_players_versus(
    Query(params): Query<PlayersVersusParams>,
    State(state): State<AppState>,
) -> Result<Json<PlayersVersusResponse>, AppError> {
    let team = params.team.trim();
    let opponent = params.opponent.trim();
    if team.is_empty() || opponent.is_empty() {
        return Err(AppError::BadRequest(
            "team and opponent must not be empty".to_string(),
        ));
    }
    if team == opponent {
        return Err(AppError::BadRequest(
            "team and opponent must differ".to_string(),
        ));
    }

    let team = TeamName::new(team);
    let opponent = TeamName::new(opponent);
    let top = params.top.unwrap_or(DEFAULT_TOP);

    let dataset = state.dataset().await;
    let players = aggregate_versus(&dataset.players, &team, &opponent);

    Ok(Json(PlayersVersusResponse {
        team: team.to_string(),
        opponent: opponent.to_string(),
        top_by_goals: top_by_goals(&players, top),
        top_by_assists: top_by_assists(&players, top),
        players,
    }))
}
