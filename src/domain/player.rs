//! Player appearance rows for the versus-opponent aggregation.

use crate::domain::TeamName;
use serde::{Deserialize, Serialize};

/// One row of the player log: a player's contribution in matches for `team`
/// against `opponent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAppearance {
    pub name: String,
    pub position: String,
    pub team: TeamName,
    pub opponent: TeamName,
    pub goals: u32,
    pub assists: u32,
    pub total_points: i64,
}

impl PlayerAppearance {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        team: TeamName,
        opponent: TeamName,
        goals: u32,
        assists: u32,
        total_points: i64,
    ) -> Self {
        PlayerAppearance {
            name: name.into(),
            position: position.into(),
            team,
            opponent,
            goals,
            assists,
            total_points,
        }
    }
}
