//! Error types for marquee
//!
//! Handlers return `AppError` and let the `IntoResponse` impl render the
//! matching error page. Database failures are logged with full detail but
//! surface to the browser as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Record or page not found (404)
    #[error("{0} not found")]
    NotFound(String),

    /// Required form field missing or blank (400)
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Form field present but unusable (400)
    #[error("invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// Database failure (500)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO failure, e.g. creating the database directory (500)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                format!("The {what} you were looking for does not exist."),
            ),
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Incomplete input: {field} is required."),
            ),
            AppError::InvalidField { field, message } => {
                (StatusCode::BAD_REQUEST, format!("Invalid {field}: {message}."))
            }
            AppError::Database(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred. The change was not saved.".to_string(),
                )
            }
            AppError::Io(err) => {
                tracing::error!("IO error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred. The change was not saved.".to_string(),
                )
            }
        };

        (status, views::error_page(status, &message)).into_response()
    }
}

/// Result type for handlers and database access
pub type AppResult<T> = Result<T, AppError>;
