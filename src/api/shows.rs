//! Show routes: chronological listing and booking.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::api::{flash_redirect, required, FlashParams};
use crate::db::{artists, shows, venues};
use crate::error::{AppError, AppResult};
use crate::{timefmt, views, AppState};

/// Show form fields as submitted by the booking form.
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    pub venue_id: Option<String>,
    pub artist_id: Option<String>,
    pub start_time: Option<String>,
}

fn parse_id(field: &'static str, value: Option<&str>) -> AppResult<i64> {
    let raw = required(field, value)?;
    raw.parse().map_err(|_| AppError::InvalidField {
        field,
        message: format!("\"{raw}\" is not a numeric id"),
    })
}

fn parse_start_time(value: Option<&str>) -> AppResult<NaiveDateTime> {
    let raw = required("start_time", value)?;
    timefmt::parse_form(&raw).ok_or_else(|| AppError::InvalidField {
        field: "start_time",
        message: format!("\"{raw}\" is not a recognized date and time"),
    })
}

/// GET /shows
pub async fn shows_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let listings = shows::list_shows(&state.db).await?;
    Ok(views::shows::list_page(&listings, params.flash.as_deref()))
}

/// GET /shows/create
pub async fn new_show_page(Query(params): Query<FlashParams>) -> Html<String> {
    let default_start = timefmt::form_value(&timefmt::now());
    views::shows::form_page(&default_start, params.flash.as_deref())
}

/// POST /shows/create
///
/// Both referenced records must exist before the insert so a bad id
/// reads as user error rather than a foreign key failure.
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> AppResult<Redirect> {
    let venue_id = parse_id("venue_id", form.venue_id.as_deref())?;
    let artist_id = parse_id("artist_id", form.artist_id.as_deref())?;
    let start_time = parse_start_time(form.start_time.as_deref())?;

    if !venues::venue_exists(&state.db, venue_id).await? {
        return Err(AppError::InvalidField {
            field: "venue_id",
            message: format!("no venue with id {venue_id}"),
        });
    }
    if !artists::artist_exists(&state.db, artist_id).await? {
        return Err(AppError::InvalidField {
            field: "artist_id",
            message: format!("no artist with id {artist_id}"),
        });
    }

    shows::insert_show(&state.db, venue_id, artist_id, start_time).await?;

    Ok(flash_redirect("/shows", "Show was successfully listed!"))
}

/// Build show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows_page))
        .route("/shows/create", get(new_show_page).post(create_show))
}
