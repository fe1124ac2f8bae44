use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use super::error::ApiError;
use super::types::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestResponse,
    ReassignReviewerRequest, ReassignReviewerResponse,
};
use super::AppState;

pub async fn create(
    State((_config, service)): State<AppState>,
    Json(payload): Json<CreatePullRequestRequest>,
) -> Result<(StatusCode, Json<PullRequestResponse>), ApiError> {
    info!(
        "Creating PR {} for author {}",
        payload.pull_request_id, payload.author_id
    );
    let pr = service
        .create_pull_request(
            &payload.pull_request_id,
            &payload.pull_request_name,
            &payload.author_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(PullRequestResponse { pr })))
}

pub async fn merge(
    State((_config, service)): State<AppState>,
    Json(payload): Json<MergePullRequestRequest>,
) -> Result<Json<PullRequestResponse>, ApiError> {
    let pr = service.merge_pull_request(&payload.pull_request_id).await?;
    Ok(Json(PullRequestResponse { pr }))
}

pub async fn reassign(
    State((_config, service)): State<AppState>,
    Json(payload): Json<ReassignReviewerRequest>,
) -> Result<Json<ReassignReviewerResponse>, ApiError> {
    let reassignment = service
        .reassign_reviewer(&payload.pull_request_id, &payload.old_user_id)
        .await?;
    Ok(Json(ReassignReviewerResponse {
        pr: reassignment.pull_request,
        replaced_by: reassignment.replaced_by,
    }))
}
