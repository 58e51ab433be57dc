use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

/// Application-level failures that escape a handler.
///
/// Verification outcomes (401/404/410) are intentional responses, not errors;
/// they are shaped by the tokeninfo handler itself. Only genuine infrastructure
/// failures flow through here, so a store outage surfaces as 500 and is never
/// mistaken for "bad credentials" or "token not found".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let body = ErrorResponseBody {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(_: RepoError) -> Self {
        AppError::Internal
    }
}
