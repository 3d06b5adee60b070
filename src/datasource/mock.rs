//! Mock stats source for testing without fixture files.

use super::{DataSourceError, StatsSource};
use crate::domain::{MatchLog, MatchRecord, PlayerAppearance};
use async_trait::async_trait;

/// Mock source that returns predefined in-memory data.
#[derive(Debug, Clone, Default)]
pub struct MockStatsSource {
    matches: Vec<MatchRecord>,
    players: Vec<PlayerAppearance>,
}

impl MockStatsSource {
    /// Create a new mock source with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a match to the mock source.
    pub fn with_match(mut self, record: MatchRecord) -> Self {
        self.matches.push(record);
        self
    }

    /// Add multiple matches to the mock source.
    pub fn with_matches(mut self, records: Vec<MatchRecord>) -> Self {
        self.matches.extend(records);
        self
    }

    /// Add a player row to the mock source.
    pub fn with_player(mut self, row: PlayerAppearance) -> Self {
        self.players.push(row);
        self
    }

    /// Add multiple player rows to the mock source.
    pub fn with_players(mut self, rows: Vec<PlayerAppearance>) -> Self {
        self.players.extend(rows);
        self
    }
}

#[async_trait]
impl StatsSource for MockStatsSource {
    async fn load_matches(&self) -> Result<MatchLog, DataSourceError> {
        Ok(MatchLog::new(self.matches.clone()))
    }

    async fn load_players(&self) -> Result<Vec<PlayerAppearance>, DataSourceError> {
        Ok(self.players.clone())
    }
}
