use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::trip::Purpose;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("duration must be between 1 and 30 days, got {0}")]
    InvalidDuration(i64),
    #[error("budget must be a non-negative amount, got {0}")]
    InvalidBudget(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no activity template for purpose {0}")]
    MissingTemplate(Purpose),
    #[error("no transportation options configured")]
    NoTransportation,
    #[error("day {0} falls outside the supported calendar range")]
    DateOutOfRange(u32),
    #[error("destination {0} has no activities to sample from")]
    EmptyActivityPool(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("incomplete catalog: {0}")]
    Incomplete(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("destination not found: {0}")]
    DestinationNotFound(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(GenerationError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Generation(GenerationError::DateOutOfRange(_)) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DestinationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
