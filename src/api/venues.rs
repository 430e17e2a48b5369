//! Venue routes: grouped listing, search, detail, create, edit, delete.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{flash_redirect, optional, required, FlashParams, SearchParams};
use crate::db::{shows, venues};
use crate::error::{AppError, AppResult};
use crate::{genres, timefmt, views, AppState};

/// Venue form fields as submitted by the create and edit forms.
#[derive(Debug, Deserialize)]
pub struct VenueForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    /// Checkbox: present (any value) when ticked, absent otherwise.
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

/// Validate a submitted form into a write-ready input.
///
/// Genres arrive as comma-separated text and are stored colon-delimited.
fn venue_input(form: &VenueForm) -> AppResult<venues::VenueInput> {
    let genre_list = genres::from_form(form.genres.as_deref().unwrap_or_default());
    if genre_list.is_empty() {
        return Err(AppError::MissingField("genres"));
    }

    Ok(venues::VenueInput {
        name: required("name", form.name.as_deref())?,
        city: required("city", form.city.as_deref())?,
        state: required("state", form.state.as_deref())?,
        address: required("address", form.address.as_deref())?,
        phone: required("phone", form.phone.as_deref())?,
        genres: genres::join(&genre_list),
        facebook_link: required("facebook_link", form.facebook_link.as_deref())?,
        image_link: optional(form.image_link.as_deref()),
        website: optional(form.website.as_deref()),
        seeking_talent: form.seeking_talent.is_some(),
        seeking_description: optional(form.seeking_description.as_deref()),
    })
}

/// GET /venues
pub async fn venues_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let areas = venues::list_grouped(&state.db, timefmt::now()).await?;
    Ok(views::venues::list_page(&areas, params.flash.as_deref()))
}

async fn run_search(state: &AppState, term: &str) -> AppResult<Html<String>> {
    let term = term.trim();
    // An empty term matches nothing and skips the database entirely
    let results = if term.is_empty() {
        Vec::new()
    } else {
        venues::search_venues(&state.db, term, timefmt::now()).await?
    };
    Ok(views::venues::search_page(term, &results))
}

/// GET /venues/search
pub async fn search_venues_query(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Html<String>> {
    run_search(&state, params.search_term.as_deref().unwrap_or_default()).await
}

/// POST /venues/search
pub async fn search_venues_form(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> AppResult<Html<String>> {
    run_search(&state, params.search_term.as_deref().unwrap_or_default()).await
}

/// GET /venues/:id
pub async fn venue_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let venue = venues::get_venue(&state.db, id).await?;
    let all_shows = shows::shows_for_venue(&state.db, id).await?;
    let (past, upcoming) = shows::partition_shows(all_shows, timefmt::now(), |s| s.start_time);
    Ok(views::venues::detail_page(
        &venue,
        &past,
        &upcoming,
        params.flash.as_deref(),
    ))
}

/// GET /venues/create
pub async fn new_venue_page(Query(params): Query<FlashParams>) -> Html<String> {
    views::venues::form_page(None, params.flash.as_deref())
}

/// POST /venues/create (and POST /venues)
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> AppResult<Redirect> {
    let input = venue_input(&form)?;
    let id = venues::insert_venue(&state.db, &input).await?;

    let message = format!("Venue {} was successfully listed!", input.name);
    Ok(flash_redirect(&format!("/venues/{id}"), &message))
}

/// GET /venues/:id/edit
pub async fn edit_venue_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let venue = venues::get_venue(&state.db, id).await?;
    Ok(views::venues::form_page(Some(&venue), None))
}

/// POST /venues/:id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> AppResult<Redirect> {
    let input = venue_input(&form)?;
    venues::update_venue(&state.db, id, &input).await?;

    let message = format!("Venue {} was successfully updated!", input.name);
    Ok(flash_redirect(&format!("/venues/{id}"), &message))
}

/// DELETE /venues/:id
///
/// Answers JSON for the detail page script; the `redirect` field carries
/// the follow-up location including the flash message.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let venue = venues::get_venue(&state.db, id).await?;
    venues::delete_venue(&state.db, id).await?;

    let message = format!("Venue {} was deleted.", venue.name);
    Ok(Json(json!({
        "id": id,
        "name": venue.name,
        "redirect": format!("/?flash={}", urlencoding::encode(&message)),
    })))
}

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues_page).post(create_venue))
        .route(
            "/venues/search",
            get(search_venues_query).post(search_venues_form),
        )
        .route("/venues/create", get(new_venue_page).post(create_venue))
        .route("/venues/:id", get(venue_page).delete(delete_venue))
        .route("/venues/:id/edit", get(edit_venue_page).post(update_venue))
}
