//! Error types for the library API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Main application error type.
///
/// Business rule violations (`DuplicateIsbn`, `BookNotFound`) are expected,
/// client-facing failures and map to 400. Identity lookups that come up empty
/// map to 404. Everything coming out of the store that the business logic did
/// not anticipate is an infrastructure failure and maps to 500.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Isbn já cadastrado.")]
    DuplicateIsbn,

    #[error("Book not found for passed isbn")]
    BookNotFound,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();
        AppError::Validation(messages)
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::DuplicateIsbn | AppError::BookNotFound => {
                (StatusCode::BAD_REQUEST, vec![self.to_string()])
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            AppError::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Database error".to_string()],
                )
            }
        };

        (status, Json(ErrorResponse { errors })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
