//! HTTP surface: thin axum handlers over `ReviewService`.

pub mod error;
pub mod health;
pub mod pull_requests;
pub mod teams;
pub mod types;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::service::ReviewService;

pub type AppState = (AppConfig, ReviewService);

pub fn router(config: AppConfig, service: ReviewService) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/status", get(health::status_endpoint))
        .route("/team/add", post(teams::add_team))
        .route("/team/get", get(teams::get_team))
        .route("/users/setIsActive", post(users::set_is_active))
        .route("/users/getReview", get(users::get_reviews))
        .route("/pullRequest/create", post(pull_requests::create))
        .route("/pullRequest/merge", post(pull_requests::merge))
        .route("/pullRequest/reassign", post(pull_requests::reassign))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .into_inner(),
        )
        .with_state((config, service))
}
