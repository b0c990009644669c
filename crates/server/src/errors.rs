use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::{PaginationError, StepsError};
use thiserror::Error;
use tracing::{error, warn};

use crate::observability::REJECTED_REQUESTS_TOTAL;

/// Errors surfaced by HTTP handlers, rendered as `{"error": msg}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Steps(#[from] StepsError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Pagination(_) | Self::Steps(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status.is_server_error() {
            error!(error = %msg, "request failed");
        } else {
            REJECTED_REQUESTS_TOTAL.inc();
            warn!(error = %msg, "request rejected");
        }
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_client_errors() {
        assert_eq!(ApiError::from(PaginationError::page_size(0)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(StepsError::UnknownStatus("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Internal("boom".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn pagination_error_keeps_message() {
        let err = ApiError::from(PaginationError::page_size(-2));
        assert_eq!(err.to_string(), "invalid argument: page_size must be >= 1, got -2");
    }
}
