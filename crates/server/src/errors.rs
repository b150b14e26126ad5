use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Message;
use thiserror::Error;
use tracing::{error, warn};

use service::auth::errors::AuthError;
use service::catalog::errors::CatalogError;

/// Error returned by every handler; rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(Message::new(self.message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        let status = match e {
            AuthError::Validation => StatusCode::BAD_REQUEST,
            AuthError::Conflict => StatusCode::CONFLICT,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        };
        warn!(code = e.code(), %status, "auth request rejected");
        Self::new(status, e.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        let status = match e {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::BookNotFound(_) | CatalogError::ReviewNotFound => StatusCode::NOT_FOUND,
            CatalogError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_client_error() {
            warn!(code = e.code(), %status, "catalog request rejected");
        }
        Self::new(status, e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("catalog seed failed: {0}")]
    Seed(#[from] service::errors::ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
