//! Match record type with a tagged full-time result.

use crate::domain::TeamName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full-time result of a match from the home side's perspective.
///
/// The source data carries this as a single-letter code (`H`/`A`/`D`); when
/// the code is absent or unrecognized the result is derived from the
/// full-time goals instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchResult {
    /// Parse a result code as found in the match log.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "H" | "h" => Some(MatchResult::HomeWin),
            "A" | "a" => Some(MatchResult::AwayWin),
            "D" | "d" => Some(MatchResult::Draw),
            _ => None,
        }
    }

    /// Derive the result from full-time goals.
    pub fn from_goals(home_goals: u32, away_goals: u32) -> Self {
        match home_goals.cmp(&away_goals) {
            std::cmp::Ordering::Greater => MatchResult::HomeWin,
            std::cmp::Ordering::Less => MatchResult::AwayWin,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }

    /// The single-letter code used by the source data.
    pub fn as_code(&self) -> &'static str {
        match self {
            MatchResult::HomeWin => "H",
            MatchResult::AwayWin => "A",
            MatchResult::Draw => "D",
        }
    }
}

/// One row of the match log.
///
/// Only the date, team names, full-time goals, and full-time result are read
/// by the engine; the remaining fields are passed through for callers that
/// want them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Calendar date the match was played.
    pub date: NaiveDate,
    /// Home side.
    pub home_team: TeamName,
    /// Away side.
    pub away_team: TeamName,
    /// Full-time home goals.
    pub home_goals: u32,
    /// Full-time away goals.
    pub away_goals: u32,
    /// Full-time result.
    pub result: MatchResult,
    /// Season label (e.g., "2024/25"), when the source provides one.
    pub season: Option<String>,
    /// Half-time home goals, when the source provides them.
    pub half_time_home_goals: Option<u32>,
    /// Half-time away goals, when the source provides them.
    pub half_time_away_goals: Option<u32>,
    /// Half-time result, when the source provides one.
    pub half_time_result: Option<MatchResult>,
    /// Home shots, when the source provides them.
    pub home_shots: Option<u32>,
    /// Away shots, when the source provides them.
    pub away_shots: Option<u32>,
}

impl MatchRecord {
    /// Create a record from the fields the engine reads, deriving the result
    /// from goals. Pass-through fields start empty.
    pub fn new(
        date: NaiveDate,
        home_team: TeamName,
        away_team: TeamName,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        MatchRecord {
            date,
            home_team,
            away_team,
            home_goals,
            away_goals,
            result: MatchResult::from_goals(home_goals, away_goals),
            season: None,
            half_time_home_goals: None,
            half_time_away_goals: None,
            half_time_result: None,
            home_shots: None,
            away_shots: None,
        }
    }

    /// Override the tagged result (used when the source supplies a code).
    pub fn with_result(mut self, result: MatchResult) -> Self {
        self.result = result;
        self
    }

    /// True if the given team played in this match, on either side.
    pub fn involves(&self, team: &TeamName) -> bool {
        &self.home_team == team || &self.away_team == team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_result_from_code() {
        assert_eq!(MatchResult::from_code("H"), Some(MatchResult::HomeWin));
        assert_eq!(MatchResult::from_code("A"), Some(MatchResult::AwayWin));
        assert_eq!(MatchResult::from_code(" d "), Some(MatchResult::Draw));
        assert_eq!(MatchResult::from_code("X"), None);
        assert_eq!(MatchResult::from_code(""), None);
        for result in [MatchResult::HomeWin, MatchResult::AwayWin, MatchResult::Draw] {
            assert_eq!(MatchResult::from_code(result.as_code()), Some(result));
        }
    }

    #[test]
    fn test_result_from_goals() {
        assert_eq!(MatchResult::from_goals(2, 0), MatchResult::HomeWin);
        assert_eq!(MatchResult::from_goals(0, 3), MatchResult::AwayWin);
        assert_eq!(MatchResult::from_goals(1, 1), MatchResult::Draw);
    }

    #[test]
    fn test_new_derives_result_from_goals() {
        let record = MatchRecord::new(
            date(2024, 8, 16),
            TeamName::from("Man United"),
            TeamName::from("Fulham"),
            1,
            0,
        );
        assert_eq!(record.result, MatchResult::HomeWin);

        let overridden = record.with_result(MatchResult::Draw);
        assert_eq!(overridden.result, MatchResult::Draw);
    }

    #[test]
    fn test_involves_either_side() {
        let record = MatchRecord::new(
            date(2024, 8, 16),
            TeamName::from("Man United"),
            TeamName::from("Fulham"),
            1,
            0,
        );
        assert!(record.involves(&TeamName::from("Man United")));
        assert!(record.involves(&TeamName::from("Fulham")));
        assert!(!record.involves(&TeamName::from("Arsenal")));
    }
}
