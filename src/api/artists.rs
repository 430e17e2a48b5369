//! Artist routes: listing, search, detail, create, edit, delete.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{flash_redirect, optional, required, FlashParams, SearchParams};
use crate::db::{artists, shows};
use crate::error::{AppError, AppResult};
use crate::{genres, timefmt, views, AppState};

/// Artist form fields as submitted by the create and edit forms.
#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    /// Checkbox: present (any value) when ticked, absent otherwise.
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

fn artist_input(form: &ArtistForm) -> AppResult<artists::ArtistInput> {
    let genre_list = genres::from_form(form.genres.as_deref().unwrap_or_default());
    if genre_list.is_empty() {
        return Err(AppError::MissingField("genres"));
    }

    Ok(artists::ArtistInput {
        name: required("name", form.name.as_deref())?,
        city: required("city", form.city.as_deref())?,
        state: required("state", form.state.as_deref())?,
        phone: required("phone", form.phone.as_deref())?,
        genres: genres::join(&genre_list),
        facebook_link: required("facebook_link", form.facebook_link.as_deref())?,
        image_link: optional(form.image_link.as_deref()),
        website: optional(form.website.as_deref()),
        seeking_venue: form.seeking_venue.is_some(),
        seeking_description: optional(form.seeking_description.as_deref()),
    })
}

/// GET /artists
pub async fn artists_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let artists = artists::list_artists(&state.db).await?;
    Ok(views::artists::list_page(&artists, params.flash.as_deref()))
}

async fn run_search(state: &AppState, term: &str) -> AppResult<Html<String>> {
    let term = term.trim();
    // An empty term matches nothing and skips the database entirely
    let results = if term.is_empty() {
        Vec::new()
    } else {
        artists::search_artists(&state.db, term, timefmt::now()).await?
    };
    Ok(views::artists::search_page(term, &results))
}

/// GET /artists/search
pub async fn search_artists_query(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Html<String>> {
    run_search(&state, params.search_term.as_deref().unwrap_or_default()).await
}

/// POST /artists/search
pub async fn search_artists_form(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> AppResult<Html<String>> {
    run_search(&state, params.search_term.as_deref().unwrap_or_default()).await
}

/// GET /artists/:id
pub async fn artist_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let artist = artists::get_artist(&state.db, id).await?;
    let all_shows = shows::shows_for_artist(&state.db, id).await?;
    let (past, upcoming) = shows::partition_shows(all_shows, timefmt::now(), |s| s.start_time);
    Ok(views::artists::detail_page(
        &artist,
        &past,
        &upcoming,
        params.flash.as_deref(),
    ))
}

/// GET /artists/create
pub async fn new_artist_page(Query(params): Query<FlashParams>) -> Html<String> {
    views::artists::form_page(None, params.flash.as_deref())
}

/// POST /artists/create (and POST /artists)
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> AppResult<Redirect> {
    let input = artist_input(&form)?;
    let id = artists::insert_artist(&state.db, &input).await?;

    let message = format!("Artist {} was successfully listed!", input.name);
    Ok(flash_redirect(&format!("/artists/{id}"), &message))
}

/// GET /artists/:id/edit
pub async fn edit_artist_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let artist = artists::get_artist(&state.db, id).await?;
    Ok(views::artists::form_page(Some(&artist), None))
}

/// POST /artists/:id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> AppResult<Redirect> {
    let input = artist_input(&form)?;
    artists::update_artist(&state.db, id, &input).await?;

    let message = format!("Artist {} was successfully updated!", input.name);
    Ok(flash_redirect(&format!("/artists/{id}"), &message))
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let artist = artists::get_artist(&state.db, id).await?;
    artists::delete_artist(&state.db, id).await?;

    let message = format!("Artist {} was deleted.", artist.name);
    Ok(Json(json!({
        "id": id,
        "name": artist.name,
        "redirect": format!("/?flash={}", urlencoding::encode(&message)),
    })))
}

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists_page).post(create_artist))
        .route(
            "/artists/search",
            get(search_artists_query).post(search_artists_form),
        )
        .route("/artists/create", get(new_artist_page).post(create_artist))
        .route("/artists/:id", get(artist_page).delete(delete_artist))
        .route(
            "/artists/:id/edit",
            get(edit_artist_page).post(update_artist),
        )
}
