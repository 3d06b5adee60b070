use axum::extract::{Query, State};
use axum::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{HeadToHeadQuery, ResultFilter, TeamName, WinningParty};
use crate::engine::{self, ClassifiedMatch, HeadToHeadReport};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadParams {
    pub team_a: String,
    pub team_b: String,
    pub years: Option<i32>,
    pub result: Option<String>,
    pub form_limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadResponse {
    pub team_a: String,
    pub team_b: String,
    pub cutoff_year: i32,
    pub tally: TallyBody,
    pub matches: Vec<MatchBody>,
    pub form: FormBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyBody {
    pub team_a_wins: u32,
    pub draws: u32,
    pub team_b_wins: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBody {
    pub date: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub score: String,
    pub winner: WinningParty,
    /// Winning team name, or "Draw".
    pub winning_team: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBody {
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

fn parse_team(field: &str, value: &str) -> Result<TeamName, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(TeamName::new(trimmed))
}

fn match_body(classified: &ClassifiedMatch, report: &HeadToHeadReport) -> MatchBody {
    let record = &classified.record;
    let winning_team = match classified.winner {
        WinningParty::TeamA => report.team_a.to_string(),
        WinningParty::TeamB => report.team_b.to_string(),
        WinningParty::Draw => "Draw".to_string(),
    };
    MatchBody {
        date: record.date.to_string(),
        year: record.date.year(),
        season: record.season.clone(),
        home_team: record.home_team.to_string(),
        away_team: record.away_team.to_string(),
        home_goals: record.home_goals,
        away_goals: record.away_goals,
        score: format!("{}-{}", record.home_goals, record.away_goals),
        winner: classified.winner,
        winning_team,
    }
}

pub async fn get_head_to_head(
    Query(params): Query<HeadToHeadParams>,
    State(state): State<AppState>,
) -> Result<Json<HeadToHeadResponse>, AppError> {
    let team_a = parse_team("teamA", &params.team_a)?;
    let team_b = parse_team("teamB", &params.team_b)?;

    let years = params.years.unwrap_or(state.config.lookback_years);
    if years < 0 {
        return Err(AppError::BadRequest(
            "years must be non-negative".to_string(),
        ));
    }

    let result_filter = match params.result.as_deref() {
        None => ResultFilter::All,
        Some(s) => ResultFilter::parse(s).ok_or_else(|| {
            AppError::BadRequest(format!(
                "result must be one of all, teamA, teamB, draw; got {}",
                s
            ))
        })?,
    };

    let query = HeadToHeadQuery::new(team_a, team_b)
        .with_years(years)
        .with_result_filter(result_filter)
        .with_form_limit(params.form_limit.unwrap_or(state.config.form_limit));

    let dataset = state.dataset().await;
    let report = engine::run_query(&dataset.matches, &query, state.config.lookback_anchor)?;

    let matches = report
        .matches
        .iter()
        .map(|m| match_body(m, &report))
        .collect();

    Ok(Json(HeadToHeadResponse {
        team_a: report.team_a.to_string(),
        team_b: report.team_b.to_string(),
        cutoff_year: report.cutoff_year,
        tally: TallyBody {
            team_a_wins: report.tally.wins_a,
            draws: report.tally.draws,
            team_b_wins: report.tally.wins_b,
        },
        matches,
        form: FormBody {
            team_a: report.form_a.iter().map(|o| o.as_letter().to_string()).collect(),
            team_b: report.form_b.iter().map(|o| o.as_letter().to_string()).collect(),
        },
    }))
}
