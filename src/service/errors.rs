//! # Service Errors
//!
//! Error types surfaced over HTTP.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for service handlers
pub type ServiceResult<T> = Result<T, ServiceError>;

/// HTTP-facing errors
///
/// Unsupported query options are never errors; the only failure a request
/// can see is a point lookup that finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No entity with the requested key
    #[error("{entity_type} not found")]
    NotFound { entity_type: String },
}

impl ServiceError {
    pub fn not_found(entity_type: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
