use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

pub const BLANK_FIELD: &str = "This field may not be blank.";
pub const REQUIRED_FIELD: &str = "This field is required.";

/// Per-field validation messages, serialized as `{ "field": ["message", ...] }`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication credentials were not provided")]
    Unauthenticated,
    #[error("invalid token")]
    InvalidToken,
    #[error("validation failed: {0:?}")]
    Validation(FieldErrors),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error("blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ApiError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::PasswordHash(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            ApiError::Unauthenticated => HttpResponse::build(status)
                .insert_header(("WWW-Authenticate", "Token"))
                .json(json!({ "detail": "Authentication credentials were not provided." })),
            ApiError::InvalidToken => HttpResponse::build(status)
                .insert_header(("WWW-Authenticate", "Token"))
                .json(json!({ "detail": "Invalid token." })),
            ApiError::Validation(errors) => HttpResponse::build(status).json(errors),
            ApiError::MalformedBody(message) => {
                HttpResponse::build(status).json(json!({ "detail": message }))
            }
            ApiError::Database(_) | ApiError::PasswordHash(_) | ApiError::Blocking(_) => {
                error!("Request failed: {}", self);
                HttpResponse::build(status).json(json!({ "detail": "A server error occurred." }))
            }
        }
    }
}
