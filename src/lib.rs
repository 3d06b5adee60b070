pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use datasource::{CsvFileSource, Dataset, DataSourceError, MockStatsSource, StatsSource};
pub use domain::{
    HeadToHeadQuery, MatchLog, MatchRecord, MatchResult, Outcome, PlayerAppearance, ResultFilter,
    TeamName, WinningParty,
};
pub use engine::{HeadToHeadReport, LookbackAnchor, Tally};
pub use error::AppError;
