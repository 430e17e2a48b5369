//! HTTP route handlers
//!
//! Each submodule owns one section of the site and exposes a `*_routes()`
//! builder that gets merged in [`crate::build_router`]. Form fields arrive
//! as `Option<String>` so a missing required field becomes a 400 page via
//! [`crate::AppError`] instead of an extractor rejection.

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::response::Redirect;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Query parameters for pages that can show a one-time flash banner.
#[derive(Debug, Deserialize)]
pub struct FlashParams {
    pub flash: Option<String>,
}

/// Search term as submitted by the search forms (POST body) or a direct
/// GET with `?search_term=`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search_term: Option<String>,
}

/// Extract a required form field, trimmed.
pub(crate) fn required(field: &'static str, value: Option<&str>) -> AppResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::MissingField(field)),
    }
}

/// Extract an optional form field, trimmed; blank collapses to `None` so
/// the database layer applies its column default.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 303 redirect carrying a flash message in the query string.
pub(crate) fn flash_redirect(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?flash={}", urlencoding::encode(message)))
}
