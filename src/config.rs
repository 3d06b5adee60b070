use crate::engine::LookbackAnchor;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub match_dataset_path: String,
    pub player_dataset_path: Option<String>,
    pub lookback_years: i32,
    pub form_limit: usize,
    pub lookback_anchor: LookbackAnchor,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let match_dataset_path = env_map
            .get("MATCH_DATASET_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("MATCH_DATASET_PATH".to_string()))?;

        let player_dataset_path = env_map.get("PLAYER_DATASET_PATH").cloned();

        let lookback_years = env_map
            .get("LOOKBACK_YEARS")
            .map(|s| s.as_str())
            .unwrap_or("10")
            .parse::<i32>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "LOOKBACK_YEARS".to_string(),
                    "must be a valid i32".to_string(),
                )
            })?;

        let form_limit = env_map
            .get("FORM_LIMIT")
            .map(|s| s.as_str())
            .unwrap_or("10")
            .parse::<usize>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "FORM_LIMIT".to_string(),
                    "must be a valid usize".to_string(),
                )
            })?;

        let lookback_anchor = match env_map
            .get("LOOKBACK_ANCHOR")
            .map(|s| s.as_str())
            .unwrap_or("wall-clock")
        {
            "wall-clock" => LookbackAnchor::WallClock,
            "latest-match" => LookbackAnchor::LatestMatch,
            other => {
                return Err(ConfigError::InvalidValue(
                    "LOOKBACK_ANCHOR".to_string(),
                    format!("must be wall-clock or latest-match, got {}", other),
                ))
            }
        };

        Ok(Config {
            port,
            match_dataset_path,
            player_dataset_path,
            lookback_years,
            form_limit,
            lookback_anchor,
        })
    }
}
