//! Error handling - the explicit error-kind to HTTP-status mapping,
//! with RFC 7807 compliant response bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cadence_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
///
/// The status mapping is the whole table:
/// bad request 400, not found 404, invalid transition 409, validation 422,
/// upstream failure 502, everything else 500.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    InvalidTransition(String),
    Validation(String),
    Upstream(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidTransition(msg) => write!(f, "Invalid transition: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Upstream(msg) => write!(f, "Upstream failure: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::InvalidTransition(detail) => ErrorResponse::conflict(detail),
            AppError::Validation(detail) => ErrorResponse::unprocessable(detail),
            // The provider message is passed through verbatim.
            AppError::Upstream(detail) => ErrorResponse::bad_gateway(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<cadence_core::DomainError> for AppError {
    fn from(err: cadence_core::DomainError) -> Self {
        match err {
            cadence_core::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            cadence_core::DomainError::Validation(msg) => AppError::Validation(msg),
            err @ cadence_core::DomainError::InvalidTransition { .. } => {
                AppError::InvalidTransition(err.to_string())
            }
            cadence_core::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<cadence_core::RepoError> for AppError {
    fn from(err: cadence_core::RepoError) -> Self {
        match err {
            cadence_core::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            cadence_core::RepoError::Constraint(msg) => AppError::InvalidTransition(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<cadence_core::UpstreamError> for AppError {
    fn from(err: cadence_core::UpstreamError) -> Self {
        AppError::Upstream(err.0)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
