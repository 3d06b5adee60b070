//! Loading the match and player logs from delimited text files.
//!
//! Parsing is split into pure functions over bytes so it can be tested
//! without touching the filesystem; the trait impl reads the configured
//! files off the async runtime.

use super::{DataSourceError, StatsSource};
use crate::domain::{MatchLog, MatchRecord, MatchResult, PlayerAppearance, TeamName};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Date format used by the match log (`16-08-2024`).
const MATCH_DATE_FORMAT: &str = "%d-%m-%Y";

/// A file with the wrong schema entirely should fail the load rather than
/// degrade into skipping every row.
fn require_columns(
    headers: &csv::StringRecord,
    required: &[&str],
) -> Result<(), DataSourceError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataSourceError::Parse(format!(
                "missing required column: {}",
                column
            )));
        }
    }
    Ok(())
}

/// CSV-backed source: a match log file plus an optional player log file.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    match_path: PathBuf,
    player_path: Option<PathBuf>,
}

impl CsvFileSource {
    pub fn new(match_path: impl Into<PathBuf>, player_path: Option<PathBuf>) -> Self {
        Self {
            match_path: match_path.into(),
            player_path,
        }
    }

    /// Parse a match log. Rows that cannot be parsed are skipped with a
    /// warning rather than failing the load; a missing or unrecognized
    /// result code falls back to deriving the result from the goals.
    pub fn parse_matches(csv_bytes: &[u8]) -> Result<MatchLog, DataSourceError> {
        #[derive(Debug, serde::Deserialize)]
        struct Row {
            #[serde(rename = "Season")]
            season: Option<String>,
            #[serde(rename = "MatchDate")]
            match_date: String,
            #[serde(rename = "HomeTeam")]
            home_team: String,
            #[serde(rename = "AwayTeam")]
            away_team: String,
            #[serde(rename = "FullTimeHomeGoals")]
            home_goals: u32,
            #[serde(rename = "FullTimeAwayGoals")]
            away_goals: u32,
            #[serde(rename = "FullTimeResult")]
            result: Option<String>,
            #[serde(rename = "HalfTimeHomeGoals")]
            half_time_home_goals: Option<u32>,
            #[serde(rename = "HalfTimeAwayGoals")]
            half_time_away_goals: Option<u32>,
            #[serde(rename = "HalfTimeResult")]
            half_time_result: Option<String>,
            #[serde(rename = "HomeShots")]
            home_shots: Option<u32>,
            #[serde(rename = "AwayShots")]
            away_shots: Option<u32>,
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_bytes);

        let headers = reader
            .headers()
            .map_err(|e| DataSourceError::Parse(e.to_string()))?
            .clone();
        require_columns(
            &headers,
            &[
                "MatchDate",
                "HomeTeam",
                "AwayTeam",
                "FullTimeHomeGoals",
                "FullTimeAwayGoals",
            ],
        )?;

        let mut records = Vec::new();
        for (index, result) in reader.deserialize::<Row>().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!("skipping unparseable match row {}: {}", index + 1, e);
                    continue;
                }
            };
            let date = match NaiveDate::parse_from_str(row.match_date.trim(), MATCH_DATE_FORMAT) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(
                        "skipping match row {} with bad date {:?}: {}",
                        index + 1,
                        row.match_date,
                        e
                    );
                    continue;
                }
            };

            let result = row
                .result
                .as_deref()
                .and_then(MatchResult::from_code)
                .unwrap_or_else(|| MatchResult::from_goals(row.home_goals, row.away_goals));

            let mut record = MatchRecord::new(
                date,
                TeamName::new(row.home_team.trim()),
                TeamName::new(row.away_team.trim()),
                row.home_goals,
                row.away_goals,
            )
            .with_result(result);
            record.season = row.season;
            record.half_time_home_goals = row.half_time_home_goals;
            record.half_time_away_goals = row.half_time_away_goals;
            record.half_time_result = row.half_time_result.as_deref().and_then(MatchResult::from_code);
            record.home_shots = row.home_shots;
            record.away_shots = row.away_shots;
            records.push(record);
        }

        Ok(MatchLog::new(records))
    }

    /// Parse a player log. Same skip-and-warn policy as match rows.
    pub fn parse_players(csv_bytes: &[u8]) -> Result<Vec<PlayerAppearance>, DataSourceError> {
        #[derive(Debug, serde::Deserialize)]
        struct Row {
            name: String,
            position: String,
            team_x: String,
            opp_team_name: String,
            goals_scored: u32,
            assists: u32,
            total_points: i64,
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_bytes);

        let headers = reader
            .headers()
            .map_err(|e| DataSourceError::Parse(e.to_string()))?
            .clone();
        require_columns(
            &headers,
            &[
                "name",
                "position",
                "team_x",
                "opp_team_name",
                "goals_scored",
                "assists",
                "total_points",
            ],
        )?;

        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<Row>().enumerate() {
            match result {
                Ok(row) => rows.push(PlayerAppearance::new(
                    row.name.trim(),
                    row.position.trim(),
                    TeamName::new(row.team_x.trim()),
                    TeamName::new(row.opp_team_name.trim()),
                    row.goals_scored,
                    row.assists,
                    row.total_points,
                )),
                Err(e) => {
                    tracing::warn!("skipping unparseable player row {}: {}", index + 1, e);
                }
            }
        }
        Ok(rows)
    }

    async fn read_file(path: &Path) -> Result<Vec<u8>, DataSourceError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || std::fs::read(&path))
            .await
            .map_err(|e| DataSourceError::Other(e.to_string()))?
            .map_err(|e| DataSourceError::Io(e.to_string()))
    }
}

#[async_trait]
impl StatsSource for CsvFileSource {
    async fn load_matches(&self) -> Result<MatchLog, DataSourceError> {
        let bytes = Self::read_file(&self.match_path).await?;
        let log = Self::parse_matches(&bytes)?;
        tracing::info!(
            "loaded {} match rows from {}",
            log.len(),
            self.match_path.display()
        );
        Ok(log)
    }

    async fn load_players(&self) -> Result<Vec<PlayerAppearance>, DataSourceError> {
        let Some(path) = &self.player_path else {
            return Ok(Vec::new());
        };
        let bytes = Self::read_file(path).await?;
        let rows = Self::parse_players(&bytes)?;
        tracing::info!("loaded {} player rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}
