use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire codes for every rejected reviewer-assignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    TeamExists,
    PrExists,
    PrMerged,
    NotAssigned,
    NoCandidate,
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("team_name already exists")]
    TeamExists,

    #[error("PR id already exists")]
    PrExists,

    #[error("cannot reassign on merged PR")]
    PrMerged,

    #[error("reviewer is not assigned to this PR")]
    NotAssigned,

    #[error("no active replacement candidate in team")]
    NoCandidate,

    #[error("{0}")]
    NotFound(String),
}

impl ReviewError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TeamExists => ErrorCode::TeamExists,
            Self::PrExists => ErrorCode::PrExists,
            Self::PrMerged => ErrorCode::PrMerged,
            Self::NotAssigned => ErrorCode::NotAssigned,
            Self::NoCandidate => ErrorCode::NoCandidate,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    pub fn user_not_found() -> Self {
        Self::NotFound("user not found".to_string())
    }

    pub fn team_not_found() -> Self {
        Self::NotFound("team not found".to_string())
    }

    pub fn pull_request_not_found() -> Self {
        Self::NotFound("PR not found".to_string())
    }

    pub fn author_not_found() -> Self {
        Self::NotFound("author not found".to_string())
    }

    pub fn author_team_not_found() -> Self {
        Self::NotFound("author team not found".to_string())
    }
}

/// Start-up problems: environment, CLI and seed files. Never reaches clients.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Seed file not found: {0:?}")]
    SeedFileNotFound(std::path::PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {reason}")]
    Parse {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}
