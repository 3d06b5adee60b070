//! Domain types for the head-to-head statistics engine.
//!
//! This module provides:
//! - Team identity as a `TeamName` newtype
//! - Match records with a tagged full-time result
//! - The immutable `MatchLog` the engine queries against
//! - Query/result vocabulary: `ResultFilter`, `WinningParty`, `Outcome`
//! - Player appearance rows for the versus-opponent aggregation

pub mod log;
pub mod match_record;
pub mod player;
pub mod query;
pub mod team;

pub use log::MatchLog;
pub use match_record::{MatchRecord, MatchResult};
pub use player::PlayerAppearance;
pub use query::{HeadToHeadQuery, Outcome, ResultFilter, WinningParty};
pub use team::TeamName;
