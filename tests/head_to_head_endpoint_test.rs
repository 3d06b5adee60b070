use axum::http::StatusCode;
use chrono::NaiveDate;
use pitchside::api::{self, AppState};
use pitchside::datasource::{MockStatsSource, StatsSource};
use pitchside::engine::LookbackAnchor;
use pitchside::{Config, MatchRecord, TeamName};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_config() -> Config {
    Config {
        port: 0,
        match_dataset_path: "unused.csv".to_string(),
        player_dataset_path: None,
        lookback_years: 10,
        form_limit: 10,
        // Anchored to the fixture data so tests do not drift with the clock.
        lookback_anchor: LookbackAnchor::LatestMatch,
    }
}

fn record(y: i32, m: u32, d: u32, home: &str, away: &str, hg: u32, ag: u32) -> MatchRecord {
    MatchRecord::new(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        TeamName::from(home),
        TeamName::from(away),
        hg,
        ag,
    )
}

async fn setup_app(matches: Vec<MatchRecord>) -> axum::Router {
    let source = Arc::new(MockStatsSource::new().with_matches(matches));
    let dataset = source.load_dataset().await.unwrap();
    api::create_router(AppState::new(dataset, source, test_config()))
}

async fn request(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn derby_fixture() -> Vec<MatchRecord> {
    // The 2012 row is older than the 2013 cutoff of a 10-year window
    // anchored at the latest fixture match (2023).
    vec![
        record(2023, 5, 1, "Man United", "Fulham", 1, 0),
        record(2022, 1, 10, "Fulham", "Man United", 2, 2),
        record(2012, 3, 1, "Man United", "Fulham", 0, 1),
    ]
}

#[tokio::test]
async fn test_head_to_head_known_history() {
    let app = setup_app(derby_fixture()).await;
    let (status, body) = request(
        app,
        "/v1/head-to-head?teamA=Man%20United&teamB=Fulham&years=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cutoffYear"], 2013);
    assert_eq!(body["tally"]["teamAWins"], 1);
    assert_eq!(body["tally"]["draws"], 1);
    assert_eq!(body["tally"]["teamBWins"], 0);

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    // Newest first.
    assert_eq!(matches[0]["date"], "2023-05-01");
    assert_eq!(matches[0]["score"], "1-0");
    assert_eq!(matches[0]["winner"], "teamA");
    assert_eq!(matches[0]["winningTeam"], "Man United");
    assert_eq!(matches[1]["winner"], "draw");
    assert_eq!(matches[1]["winningTeam"], "Draw");

    assert_eq!(body["form"]["teamA"], serde_json::json!(["W", "D"]));
    assert_eq!(body["form"]["teamB"], serde_json::json!(["L", "D"]));
}

#[tokio::test]
async fn test_head_to_head_is_symmetric_in_tally() {
    let (status_ab, ab) = request(
        setup_app(derby_fixture()).await,
        "/v1/head-to-head?teamA=Man%20United&teamB=Fulham",
    )
    .await;
    let (status_ba, ba) = request(
        setup_app(derby_fixture()).await,
        "/v1/head-to-head?teamA=Fulham&teamB=Man%20United",
    )
    .await;

    assert_eq!(status_ab, StatusCode::OK);
    assert_eq!(status_ba, StatusCode::OK);
    assert_eq!(ab["tally"]["teamAWins"], ba["tally"]["teamBWins"]);
    assert_eq!(ab["tally"]["draws"], ba["tally"]["draws"]);
    assert_eq!(
        ab["matches"].as_array().unwrap().len(),
        ba["matches"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn test_head_to_head_result_filter() {
    let app = setup_app(derby_fixture()).await;
    let (status, body) = request(
        app,
        "/v1/head-to-head?teamA=Man%20United&teamB=Fulham&result=draw",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["winner"], "draw");
    // Tally still covers the whole subset.
    assert_eq!(body["tally"]["teamAWins"], 1);
}

#[tokio::test]
async fn test_head_to_head_equal_teams_is_bad_request() {
    let app = setup_app(derby_fixture()).await;
    let (status, body) =
        request(app, "/v1/head-to-head?teamA=Fulham&teamB=Fulham").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("differ"));
}

#[tokio::test]
async fn test_head_to_head_unknown_team_is_bad_request() {
    let app = setup_app(derby_fixture()).await;
    let (status, body) =
        request(app, "/v1/head-to-head?teamA=Fulham&teamB=Barcelona").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Barcelona"));
}

#[tokio::test]
async fn test_head_to_head_invalid_result_filter_is_bad_request() {
    let app = setup_app(derby_fixture()).await;
    let (status, _) = request(
        app,
        "/v1/head-to-head?teamA=Man%20United&teamB=Fulham&result=victories",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_head_to_head_no_shared_history_is_empty_not_error() {
    let matches = vec![
        record(2023, 5, 1, "Man United", "Fulham", 1, 0),
        record(2023, 8, 20, "Arsenal", "Chelsea", 3, 1),
    ];
    let app = setup_app(matches).await;
    let (status, body) = request(
        app,
        "/v1/head-to-head?teamA=Man%20United&teamB=Arsenal",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["matches"].as_array().unwrap().is_empty());
    assert_eq!(body["tally"]["teamAWins"], 0);
    assert_eq!(body["tally"]["draws"], 0);
    assert_eq!(body["tally"]["teamBWins"], 0);
    assert!(body["form"]["teamA"].as_array().unwrap().is_empty());
    assert!(body["form"]["teamB"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_head_to_head_form_limit_param() {
    let matches = (1..=12u32)
        .map(|d| record(2023, 3, d, "Man United", "Fulham", d % 2, 0))
        .collect();
    let app = setup_app(matches).await;
    let (status, body) = request(
        app,
        "/v1/head-to-head?teamA=Man%20United&teamB=Fulham&formLimit=4",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["teamA"].as_array().unwrap().len(), 4);
    assert_eq!(body["form"]["teamB"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_teams_endpoint_lists_sorted_union() {
    let app = setup_app(derby_fixture()).await;
    let (status, body) = request(app, "/v1/teams").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teams"], serde_json::json!(["Fulham", "Man United"]));
}

#[tokio::test]
async fn test_health_endpoints() {
    let (status, body) = request(setup_app(vec![]).await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = request(setup_app(derby_fixture()).await, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["matchRows"], 3);
    assert_eq!(body["playerRows"], 0);
}
