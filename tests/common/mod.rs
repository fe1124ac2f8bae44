use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use reviewer_assignment::api;
use reviewer_assignment::config::AppConfig;
use reviewer_assignment::database::models::{Team, TeamMember};
use reviewer_assignment::ReviewService;
use serde_json::Value;
use tower::ServiceExt;

/// Service with a fixed RNG seed so reviewer picks are reproducible
pub fn seeded_service() -> ReviewService {
    ReviewService::new(Some(1234))
}

/// Router over a fresh seeded service
pub fn test_app() -> (Router, ReviewService) {
    let service = seeded_service();
    let config = AppConfig {
        rng_seed: Some(1234),
        ..AppConfig::default()
    };
    (api::router(config, service.clone()), service)
}

/// Build a team from (user_id, is_active) pairs
pub fn team(name: &str, members: &[(&str, bool)]) -> Team {
    Team {
        team_name: name.to_string(),
        members: members
            .iter()
            .map(|(id, active)| TeamMember {
                user_id: id.to_string(),
                username: format!("user-{}", id),
                is_active: *active,
            })
            .collect(),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub fn reviewers(pr: &Value) -> Vec<String> {
    pr["assigned_reviewers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
