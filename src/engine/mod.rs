//! Pure computation engines over the loaded dataset.

use crate::domain::{MatchRecord, Outcome, TeamName, WinningParty};
use serde::Serialize;

pub mod head_to_head;
pub mod player_stats;

pub use head_to_head::{
    anchor_year, apply_result_filter, classify_winner, compute_stats, filter_head_to_head,
    recent_form, run_query, EngineError, LookbackAnchor,
};
pub use player_stats::{aggregate_versus, top_by_assists, top_by_goals, PlayerTotals};

/// Win/draw/win counts for a head-to-head subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins_a: u32,
    pub draws: u32,
    pub wins_b: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.wins_a + self.draws + self.wins_b
    }
}

/// A head-to-head row with its derived winning party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMatch {
    pub record: MatchRecord,
    pub winner: WinningParty,
}

/// Everything a head-to-head query produces.
///
/// `matches` reflects the query's result filter; `tally` and the form
/// sequences are always computed over the full head-to-head subset, the way
/// the summary tiles and form strip behave regardless of the table filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHeadReport {
    pub team_a: TeamName,
    pub team_b: TeamName,
    /// First year inside the lookback window.
    pub cutoff_year: i32,
    pub tally: Tally,
    pub matches: Vec<ClassifiedMatch>,
    /// Newest-first outcomes for team A, at most the query's form limit.
    pub form_a: Vec<Outcome>,
    /// Newest-first outcomes for team B, complementary to `form_a`.
    pub form_b: Vec<Outcome>,
}
