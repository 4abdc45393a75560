//! # Animal Errors
//!
//! Error types for the record store and the HTTP layer on top of it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Plain-text body returned for any rejected write.
pub const NOT_PROPERLY_FORMATTED: &str = "The animal is not properly formatted";

/// Result type for animal operations
pub type AnimalResult<T> = Result<T, AnimalError>;

/// Why a candidate record was rejected. Names the first failing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("animal must be a JSON object")]
    NotAnObject,

    #[error("{0} must be a non-empty string")]
    MissingString(&'static str),

    #[error("{0} must be a list")]
    NotAList(&'static str),

    #[error("{0} must contain only strings")]
    NonStringTrait(&'static str),
}

/// Animal store errors
#[derive(Debug, Clone, Error)]
pub enum AnimalError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Candidate record failed validation
    #[error("Invalid animal: {0}")]
    Invalid(#[from] ValidationError),

    /// Request body was not parseable JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// No record with this id
    #[error("Animal not found: {0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Backing file contents could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl AnimalError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnimalError::Invalid(_) => StatusCode::BAD_REQUEST,
            AnimalError::MalformedBody(_) => StatusCode::BAD_REQUEST,

            AnimalError::NotFound(_) => StatusCode::NOT_FOUND,

            AnimalError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnimalError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnimalError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for AnimalError {
    fn from(e: std::io::Error) -> Self {
        AnimalError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AnimalError {
    fn from(e: serde_json::Error) -> Self {
        AnimalError::Serialization(e.to_string())
    }
}

/// Error response body for server-side failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<AnimalError> for ErrorResponse {
    fn from(err: AnimalError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for AnimalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AnimalError::Invalid(_) | AnimalError::MalformedBody(_) => {
                (status, NOT_PROPERLY_FORMATTED).into_response()
            }
            AnimalError::NotFound(_) => status.into_response(),
            other => (status, Json(ErrorResponse::from(other))).into_response(),
        }
    }
}
