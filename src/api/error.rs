use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{ErrorCode, ReviewError};

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

/// Body of every failed request: `{"error": {"code", "message"}}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Makes `ReviewError` usable as an axum error response.
#[derive(Debug)]
pub struct ApiError(pub ReviewError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ReviewError::TeamExists => StatusCode::BAD_REQUEST,
            ReviewError::NotFound(_) => StatusCode::NOT_FOUND,
            ReviewError::PrExists
            | ReviewError::PrMerged
            | ReviewError::NotAssigned
            | ReviewError::NoCandidate => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.0.code(),
                message: self.0.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self(err)
    }
}
