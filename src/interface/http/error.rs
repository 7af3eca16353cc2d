//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::error::AppError;
use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    /// Body or query string could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Blocking worker panicked or was cancelled.
    #[error("worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::App(AppError::Domain(DomainError::InvalidArgument(_))) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::App(AppError::Domain(DomainError::BookNotFound(_))) => StatusCode::NOT_FOUND,
            ApiError::App(AppError::StoreMissing) => StatusCode::NOT_FOUND,
            ApiError::App(AppError::Storage(_)) | ApiError::App(AppError::LockPoisoned) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
