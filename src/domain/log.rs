//! The immutable match log the engine queries against.

use crate::domain::{MatchRecord, TeamName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered sequence of match records, loaded once and never mutated.
///
/// Shared behind an `Arc` across concurrent queries; every engine operation
/// is a bounded read-only scan, so no synchronization is needed beyond the
/// swap that happens on an explicit reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLog {
    records: Vec<MatchRecord>,
}

impl MatchLog {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        MatchLog { records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted union of home and away team names.
    pub fn team_set(&self) -> BTreeSet<TeamName> {
        self.records
            .iter()
            .flat_map(|r| [r.home_team.clone(), r.away_team.clone()])
            .collect()
    }

    /// True if the team appears anywhere in the log, on either side.
    pub fn contains_team(&self, team: &TeamName) -> bool {
        self.records.iter().any(|r| r.involves(team))
    }

    /// Date of the most recent match in the log, if any.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }
}
