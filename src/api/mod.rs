pub mod head_to_head;
pub mod health;
pub mod players;
pub mod reload;
pub mod teams;

use crate::config::Config;
use crate::datasource::{Dataset, StatsSource};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<RwLock<Dataset>>,
    pub source: Arc<dyn StatsSource>,
    pub config: Config,
}

impl AppState {
    pub fn new(dataset: Dataset, source: Arc<dyn StatsSource>, config: Config) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
            source,
            config,
        }
    }

    /// Snapshot the current dataset. Cheap: the dataset is a pair of `Arc`s,
    /// so readers keep working on the snapshot even across a reload swap.
    pub async fn dataset(&self) -> Dataset {
        self.dataset.read().await.clone()
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/teams", get(teams::get_teams))
        .route("/v1/head-to-head", get(head_to_head::get_head_to_head))
        .route("/v1/players/versus", get(players::get_players_versus))
        .route("/v1/reload", post(reload::post_reload))
        .layer(cors)
        .with_state(state)
}
