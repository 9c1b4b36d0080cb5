//! Integration tests for the HTTP facade

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use common::FakeProvider;
use nba_xpt::server::{create_router, AppState};

const ORIGIN: &str = "http://localhost:3000";

fn app(provider: FakeProvider) -> Router {
    create_router(AppState::new(Arc::new(provider)), ORIGIN).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_get_players() {
    let req = Request::get("/get_players").body(Body::empty()).unwrap();
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "players": ["LeBron James", "Stephen Curry"] }));
}

#[tokio::test]
async fn test_get_players_provider_failure() {
    let req = Request::get("/get_players").body(Body::empty()).unwrap();
    let (status, body) = send(app(FakeProvider::failing()), req).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Stats provider error"));
}

#[tokio::test]
async fn test_get_game_dates() {
    let req = post_json(
        "/get_game_dates",
        json!({ "player_name": "LeBron James", "season": "2023-24", "season_type": "Regular Season" }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "dates": ["2024-04-14", "2024-04-12"] }));
}

#[tokio::test]
async fn test_get_game_dates_missing_fields() {
    let req = post_json("/get_game_dates", json!({ "player_name": "LeBron James" }));
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required parameters" }));
}

#[tokio::test]
async fn test_get_game_dates_unknown_player() {
    let req = post_json(
        "/get_game_dates",
        json!({ "player_name": "Nobody", "season": "2023-24", "season_type": "Regular Season" }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Player not found: Nobody" }));
}

#[tokio::test]
async fn test_get_game_dates_invalid_season_type() {
    let req = post_json(
        "/get_game_dates",
        json!({ "player_name": "LeBron James", "season": "2023-24", "season_type": "Finals" }),
    );
    let (status, _) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_xpt_season() {
    let req = post_json(
        "/get_xpt",
        json!({ "player_name": "LeBron James", "season": "2023-24", "season_type": "Regular Season" }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "Player": "LeBron James", "Season": "2023-24", "xPT": 31 })
    );
}

#[tokio::test]
async fn test_get_xpt_single_game() {
    let req = post_json(
        "/get_xpt",
        json!({
            "player_name": "LeBron James",
            "season": "2023-24",
            "season_type": "Regular Season",
            "game_date": "2024-04-14"
        }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["GameDate"], "2024-04-14");
    assert_eq!(body["xPT"], 7);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_get_xpt_blank_game_date_means_season() {
    let req = post_json(
        "/get_xpt",
        json!({
            "player_name": "LeBron James",
            "season": "2023-24",
            "season_type": "Regular Season",
            "game_date": ""
        }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["xPT"], 31);
    assert!(body.get("GameDate").is_none());
}

#[tokio::test]
async fn test_get_xpt_business_error_is_embedded() {
    let req = post_json(
        "/get_xpt",
        json!({ "player_name": "Nobody", "season": "2023-24", "season_type": "Regular Season" }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "Player": "Nobody",
            "Season": "2023-24",
            "xPT": null,
            "error": "Player not found: Nobody"
        })
    );
}

#[tokio::test]
async fn test_get_xpt_invalid_date_is_embedded() {
    let req = post_json(
        "/get_xpt",
        json!({
            "player_name": "LeBron James",
            "season": "2023-24",
            "season_type": "Regular Season",
            "game_date": "04/14/2024"
        }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["xPT"].is_null());
    assert!(body["error"].as_str().unwrap().contains("Invalid game date"));
}

#[tokio::test]
async fn test_get_xpt_provider_failure_is_embedded() {
    let req = post_json(
        "/get_xpt",
        json!({ "player_name": "LeBron James", "season": "2023-24", "season_type": "Playoffs" }),
    );
    let (status, body) = send(app(FakeProvider::failing()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].as_str().unwrap().starts_with("Stats provider error"));
}

#[tokio::test]
async fn test_get_xpt_missing_fields() {
    let req = post_json("/get_xpt", json!({ "season": "2023-24" }));
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required parameters" }));
}

#[tokio::test]
async fn test_each_missing_required_field_is_rejected() {
    let valid = json!({
        "player_name": "LeBron James",
        "season": "2023-24",
        "season_type": "Regular Season"
    });

    for uri in ["/get_xpt", "/get_game_dates"] {
        for field in ["player_name", "season", "season_type"] {
            for missing in [None, Some(Value::Null), Some(json!("")), Some(json!("   "))] {
                let mut body = valid.clone();
                match &missing {
                    None => {
                        body.as_object_mut().unwrap().remove(field);
                    }
                    Some(v) => body[field] = v.clone(),
                }

                let (status, resp) = send(app(FakeProvider::fixture()), post_json(uri, body)).await;
                assert_eq!(
                    status,
                    StatusCode::BAD_REQUEST,
                    "{uri} without {field} ({missing:?})"
                );
                assert_eq!(resp, json!({ "error": "Missing required parameters" }));
            }
        }
    }
}

#[tokio::test]
async fn test_get_xpt_non_string_field_is_embedded() {
    let req = post_json(
        "/get_xpt",
        json!({ "player_name": "LeBron James", "season": 2023, "season_type": "Regular Season" }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Season"], "2023");
    assert!(body["xPT"].is_null());
    assert_eq!(body["error"], "Team not found for season 2023");
}

#[tokio::test]
async fn test_get_xpt_non_string_season_type_is_embedded() {
    let req = post_json(
        "/get_xpt",
        json!({ "player_name": "LeBron James", "season": "2023-24", "season_type": 2 }),
    );
    let (status, body) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].as_str().unwrap().contains("Invalid season type"));
}

#[tokio::test]
async fn test_get_xpt_without_body() {
    let req = Request::post("/get_xpt").body(Body::empty()).unwrap();
    let (status, _) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_method() {
    let req = Request::get("/get_xpt").body(Body::empty()).unwrap();
    let (status, _) = send(app(FakeProvider::fixture()), req).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/get_xpt")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app(FakeProvider::fixture()).oneshot(req).await.unwrap();

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        ORIGIN
    );
}

#[test]
fn test_invalid_cors_origin_rejected() {
    let state = AppState::new(Arc::new(FakeProvider::fixture()));
    assert!(create_router(state, "http://bad\norigin").is_err());
}
