//! Domain-to-HTTP error mapping.
//!
//! Status codes follow the endpoint contract: validation errors and
//! duplicate enrollment map to 400, duplicate classroom names to 409,
//! not-found conditions to 404, and storage faults to an opaque 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use roster_core::{ConflictKind, RepoError};

#[derive(Debug)]
pub enum ApiError {
    /// Outcome reported by the core domain layer.
    Domain(RepoError),
    /// HTTP-layer failure unrelated to domain semantics.
    Internal(String),
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Domain(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(err) => {
                let status = match &err {
                    RepoError::Validation(_) => StatusCode::BAD_REQUEST,
                    RepoError::Conflict(ConflictKind::DuplicateClassroomName(_)) => {
                        StatusCode::CONFLICT
                    }
                    RepoError::Conflict(ConflictKind::AlreadyEnrolled { .. }) => {
                        StatusCode::BAD_REQUEST
                    }
                    RepoError::NotFound(_) => StatusCode::NOT_FOUND,
                    RepoError::Db(_) | RepoError::InvalidData(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };

                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("event=request_failed module=http status=error error={err}");
                    (status, "Internal server error").into_response()
                } else {
                    (status, err.to_string()).into_response()
                }
            }
            Self::Internal(message) => {
                error!("event=request_failed module=http status=error error={message}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
