//! Query and result vocabulary for head-to-head lookups.

use crate::domain::TeamName;
use serde::{Deserialize, Serialize};

/// Which of the two queried teams won a given match, if either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WinningParty {
    TeamA,
    TeamB,
    Draw,
}

/// Match outcome from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// The opposing team's outcome for the same match.
    /// Win and Loss swap; Draw is its own complement.
    pub fn complement(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Single-letter form (`W`/`D`/`L`) as shown in form strips.
    pub fn as_letter(&self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Draw => "D",
            Outcome::Loss => "L",
        }
    }
}

/// Narrowing applied to the head-to-head match list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultFilter {
    #[default]
    All,
    TeamAWin,
    TeamBWin,
    Draw,
}

impl ResultFilter {
    /// Parse the wire form used in query strings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Some(ResultFilter::All),
            "teama" | "team-a" => Some(ResultFilter::TeamAWin),
            "teamb" | "team-b" => Some(ResultFilter::TeamBWin),
            "draw" => Some(ResultFilter::Draw),
            _ => None,
        }
    }
}

/// A head-to-head query: two distinct teams, a lookback window, an optional
/// result filter, and the recent-form length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHeadQuery {
    pub team_a: TeamName,
    pub team_b: TeamName,
    /// Lookback window in years.
    pub years: i32,
    pub result_filter: ResultFilter,
    /// Maximum length of the recent-form sequences.
    pub form_limit: usize,
}

impl HeadToHeadQuery {
    /// A query with the default window (10 years), no result filter, and the
    /// default form length (10 matches).
    pub fn new(team_a: TeamName, team_b: TeamName) -> Self {
        HeadToHeadQuery {
            team_a,
            team_b,
            years: 10,
            result_filter: ResultFilter::All,
            form_limit: 10,
        }
    }

    pub fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn with_result_filter(mut self, filter: ResultFilter) -> Self {
        self.result_filter = filter;
        self
    }

    pub fn with_form_limit(mut self, limit: usize) -> Self {
        self.form_limit = limit;
        self
    }
}
