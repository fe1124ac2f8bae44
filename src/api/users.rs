use axum::{
    extract::{Query, State},
    response::Json,
};

use super::error::ApiError;
use super::types::{SetIsActiveRequest, UserQuery, UserResponse, UserReviewsResponse};
use super::AppState;

pub async fn set_is_active(
    State((_config, service)): State<AppState>,
    Json(payload): Json<SetIsActiveRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service
        .set_is_active(&payload.user_id, payload.is_active)
        .await?;
    Ok(Json(UserResponse { user }))
}

pub async fn get_reviews(
    State((_config, service)): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserReviewsResponse>, ApiError> {
    let pull_requests = service.get_user_reviews(&query.user_id).await?;
    Ok(Json(UserReviewsResponse {
        user_id: query.user_id,
        pull_requests,
    }))
}
