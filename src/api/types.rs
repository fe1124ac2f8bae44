//! Request and response bodies of the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::database::models::{PullRequest, PullRequestShort, StoreStats, Team, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetIsActiveRequest {
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePullRequestRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergePullRequestRequest {
    pub pull_request_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignReviewerRequest {
    pub pull_request_id: String,
    pub old_user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamQuery {
    pub team_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestResponse {
    pub pr: PullRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignReviewerResponse {
    pub pr: PullRequest,
    pub replaced_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReviewsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShort>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub features: StatusFeatures,
    pub stats: StoreStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusFeatures {
    pub seeded_selection: bool,
    pub seed_file: bool,
}
