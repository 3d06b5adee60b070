//! Data source abstraction for loading the match and player logs.

use crate::domain::{MatchLog, PlayerAppearance};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub mod csv_file;
pub mod mock;

pub use csv_file::CsvFileSource;
pub use mock::MockStatsSource;

/// The loaded dataset: immutable once built, shared behind `Arc`s so a reload
/// can swap it without copying what readers already hold.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub matches: Arc<MatchLog>,
    pub players: Arc<Vec<PlayerAppearance>>,
}

impl Dataset {
    pub fn new(matches: MatchLog, players: Vec<PlayerAppearance>) -> Self {
        Dataset {
            matches: Arc::new(matches),
            players: Arc::new(players),
        }
    }
}

/// Source of the match log and the optional player log.
///
/// Implementations load everything up front; the engine never reads files.
#[async_trait]
pub trait StatsSource: Send + Sync + fmt::Debug {
    /// Load the full match log.
    async fn load_matches(&self) -> Result<MatchLog, DataSourceError>;

    /// Load the player appearance log. Sources without one return an empty
    /// vector.
    async fn load_players(&self) -> Result<Vec<PlayerAppearance>, DataSourceError>;

    /// Load both logs into a ready-to-share dataset.
    async fn load_dataset(&self) -> Result<Dataset, DataSourceError> {
        let matches = self.load_matches().await?;
        let players = self.load_players().await?;
        Ok(Dataset::new(matches, players))
    }
}

/// Error type for data source operations.
#[derive(Debug, Clone)]
pub enum DataSourceError {
    /// File could not be read.
    Io(String),
    /// CSV structure could not be parsed at all.
    Parse(String),
    /// Other error.
    Other(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            DataSourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            DataSourceError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for DataSourceError {}
