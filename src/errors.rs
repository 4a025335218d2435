use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::export::ExportError;
use crate::generator::GenerationError;
use crate::models::OperationError;
use crate::storage::StorageError;

/// Service-wide error type. Every handler returns `Result<HttpResponse, AppError>`
/// and the `ResponseError` impl maps each variant to its HTTP status and a JSON
/// body. Server-side detail for 5xx variants is logged, never returned.
#[derive(Debug)]
pub enum AppError {
    /// Bad input: topic/slide-count validation, malformed operation, unknown format.
    Validation(String),
    /// Unknown presentation id or artifact.
    NotFound(&'static str),
    /// A delete would leave the presentation with zero slides.
    EmptyPresentation,
    /// Too many requests from one client.
    RateLimited,
    /// The content-generation backend failed.
    Generation(String),
    /// Both storage backends failed, or the local floor did.
    Storage(String),
    /// Document rendering failed.
    Export(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::NotFound(what) => write!(f, "{what} not found"),
            AppError::EmptyPresentation => {
                write!(f, "cannot delete the last remaining slide")
            }
            AppError::RateLimited => write!(f, "rate limit exceeded, try again later"),
            AppError::Generation(detail) => write!(f, "content generation failed: {detail}"),
            AppError::Storage(detail) => write!(f, "storage error: {detail}"),
            AppError::Export(detail) => write!(f, "export error: {detail}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::EmptyPresentation => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            // Client errors carry their message verbatim.
            AppError::Validation(_)
            | AppError::NotFound(_)
            | AppError::EmptyPresentation
            | AppError::RateLimited => self.to_string(),
            // Upstream/internal detail stays in the log.
            AppError::Generation(_) => {
                log::error!("{self}");
                "content generation failed, please try again".to_string()
            }
            AppError::Storage(_) | AppError::Export(_) => {
                log::error!("{self}");
                "internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": body }))
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e.to_string())
    }
}

impl From<OperationError> for AppError {
    fn from(e: OperationError) -> Self {
        match e {
            OperationError::IndexOutOfRange { .. } => AppError::Validation(e.to_string()),
            OperationError::EmptyPresentation => AppError::EmptyPresentation,
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound => AppError::NotFound("file"),
            StorageError::Backend(detail) => AppError::Storage(detail),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(format!("state serialization: {e}"))
    }
}
