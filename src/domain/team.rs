//! Team identity newtype.

use serde::{Deserialize, Serialize};

/// Team name as it appears in the match log (e.g., "Man United", "Fulham").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamName(pub String);

impl TeamName {
    /// Create a TeamName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        TeamName(name.into())
    }

    /// Get the name as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamName {
    fn from(s: &str) -> Self {
        TeamName(s.to_string())
    }
}
