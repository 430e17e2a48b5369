//! marquee library - booking-listing web app for music venues, artists, and shows
//!
//! Server-rendered HTML over a SQLite database: browse and search venues and
//! artists, inspect their past and upcoming shows, and book new shows.

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod genres;
pub mod timefmt;
pub mod views;

pub use error::{AppError, AppResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Server start time, reported by the health endpoint
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::home::home_routes())
        .merge(api::venues::venue_routes())
        .merge(api::artists::artist_routes())
        .merge(api::shows::show_routes())
        .merge(api::health::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
