use axum::{extract::State, response::Json};

use super::types::{StatusFeatures, StatusResponse};
use super::AppState;

const SERVICE_NAME: &str = "reviewer-assignment";

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now()
    }))
}

pub async fn status_endpoint(State((config, service)): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: chrono::Utc::now(),
        features: StatusFeatures {
            seeded_selection: config.rng_seed.is_some(),
            seed_file: config.seed_file.is_some(),
        },
        stats: service.stats().await,
    })
}
