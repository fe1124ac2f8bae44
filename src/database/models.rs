use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_name: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

impl User {
    pub fn from_member(member: &TeamMember, team_name: &str) -> Self {
        Self {
            user_id: member.user_id.clone(),
            username: member.username.clone(),
            team_name: team_name.to_string(),
            is_active: member.is_active,
        }
    }

    pub fn as_member(&self) -> TeamMember {
        TeamMember {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrStatus {
    Open,
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    /// At most two user ids, never the author, never repeated.
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn is_assigned(&self, user_id: &str) -> bool {
        self.assigned_reviewers.iter().any(|r| r == user_id)
    }

    pub fn to_short(&self) -> PullRequestShort {
        PullRequestShort {
            pull_request_id: self.pull_request_id.clone(),
            pull_request_name: self.pull_request_name.clone(),
            author_id: self.author_id.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestShort {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
}

/// Entity counts reported on the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub teams: usize,
    pub users: usize,
    pub pull_requests: usize,
    pub open_pull_requests: usize,
}
