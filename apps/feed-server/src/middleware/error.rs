//! Maps service failures onto RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use feed_core::error::{DomainError, RepoError};
use feed_shared::{ErrorResponse, Problem};

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn problem(&self) -> (Problem, &str) {
        match self {
            AppError::NotFound(detail) => (Problem::NotFound, detail.as_str()),
            AppError::BadRequest(detail) => (Problem::InvalidInput, detail.as_str()),
            AppError::Conflict(detail) => (Problem::Conflict, detail.as_str()),
            AppError::Internal(detail) => (Problem::Internal, detail.as_str()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        let (problem, _) = self.problem();
        StatusCode::from_u16(problem.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let (problem, detail) = self.problem();
        if problem == Problem::Internal {
            tracing::error!(detail, "Request failed");
        }

        HttpResponse::build(self.status_code())
            .content_type("application/problem+json")
            .json(ErrorResponse::new(problem, Some(detail.to_string())))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Storage(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!(error = %msg, "Storage failure");
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
