//! Integration tests for marquee HTTP endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Home page and flash banners
//! - Venue create/list/search/detail/edit/delete round trips
//! - Artist create/list/search/detail/edit/delete round trips
//! - Show booking, validation, and the joined listing
//! - Cascade behavior when a venue is deleted

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use marquee::{build_router, db, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: Build the app over a fresh in-memory database.
///
/// Single connection: every pooled connection would otherwise open its
/// own empty in-memory database.
async fn setup_app() -> axum::Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Should open in-memory database");
    db::init_schema(&pool).await.expect("Should create schema");
    build_router(AppState::new(pool))
}

/// Test helper: Create request with empty body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create urlencoded form POST
fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract response body as text
async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn venue_form(name: &str, city: &str) -> String {
    format!(
        "name={}&city={}&state=CA&address=1015+Folsom+Street&phone=123-123-1234\
         &genres=Jazz%2C+Reggae%2C+Swing&facebook_link=https%3A%2F%2Fwww.facebook.com%2Fvenue",
        urlencoding::encode(name),
        urlencoding::encode(city),
    )
}

fn artist_form(name: &str) -> String {
    format!(
        "name={}&city=San+Francisco&state=CA&phone=326-123-5000&genres=Rock+n+Roll\
         &facebook_link=https%3A%2F%2Fwww.facebook.com%2Fartist",
        urlencoding::encode(name),
    )
}

fn show_form(venue_id: i64, artist_id: i64, start_time: &str) -> String {
    format!(
        "venue_id={venue_id}&artist_id={artist_id}&start_time={}",
        urlencoding::encode(start_time),
    )
}

fn id_from_location(location: &str, prefix: &str) -> i64 {
    location
        .strip_prefix(prefix)
        .and_then(|rest| rest.split('?').next())
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("Location {location} should carry the new id"))
}

/// Test helper: Create a venue through the form endpoint, return its id
async fn create_venue(app: &axum::Router, name: &str, city: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(form_request("/venues/create", &venue_form(name, city)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response.headers().get("location").unwrap().to_str().unwrap();
    id_from_location(location, "/venues/")
}

/// Test helper: Create an artist through the form endpoint, return its id
async fn create_artist(app: &axum::Router, name: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(form_request("/artists/create", &artist_form(name)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response.headers().get("location").unwrap().to_str().unwrap();
    id_from_location(location, "/artists/")
}

/// Test helper: Book a show through the form endpoint
async fn create_show(app: &axum::Router, venue_id: i64, artist_id: i64, start_time: &str) {
    let response = app
        .clone()
        .oneshot(form_request(
            "/shows/create",
            &show_form(venue_id, artist_id, start_time),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "marquee");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_number());
}

// =============================================================================
// Home Page Tests
// =============================================================================

#[tokio::test]
async fn test_home_page_renders() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Where musical artists meet musical venues."));
    assert!(page.contains("href=\"/venues\""));
    assert!(page.contains("href=\"/shows/create\""));
}

#[tokio::test]
async fn test_home_page_shows_flash() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/?flash=Venue%20Hop%20was%20deleted."))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("class=\"flash\""));
    assert!(page.contains("Venue Hop was deleted."));
}

// =============================================================================
// Venue Tests
// =============================================================================

#[tokio::test]
async fn test_create_venue_redirects_to_detail() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(form_request(
            "/venues/create",
            &venue_form("The Musical Hop", "San Francisco"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/venues/"));
    assert!(location.contains("flash="));

    // Following the redirect lands on the detail page with the flash banner
    let response = app.oneshot(test_request("GET", &location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("<h1>The Musical Hop</h1>"));
    assert!(page.contains("Venue The Musical Hop was successfully listed!"));
}

#[tokio::test]
async fn test_post_venues_without_create_suffix() {
    let app = setup_app().await;

    let response = app
        .oneshot(form_request(
            "/venues",
            &venue_form("The Musical Hop", "San Francisco"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_create_venue_missing_city_rejected() {
    let app = setup_app().await;

    let body = "name=The+Musical+Hop&state=CA&address=1015+Folsom+Street\
                &phone=123-123-1234&genres=Jazz&facebook_link=https%3A%2F%2Ffb.com%2Fhop";
    let response = app
        .oneshot(form_request("/venues/create", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Incomplete input: city is required."));
}

#[tokio::test]
async fn test_venues_listing_groups_by_city() {
    let app = setup_app().await;
    create_venue(&app, "The Musical Hop", "San Francisco").await;
    create_venue(&app, "Park Square Live Music & Coffee", "San Francisco").await;
    create_venue(&app, "Dueling Pianos Bar", "New York").await;

    let response = app.oneshot(test_request("GET", "/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("<h2>New York, CA</h2>"));
    assert!(page.contains("<h2>San Francisco, CA</h2>"));
    assert!(page.contains("The Musical Hop"));
    assert!(page.contains("Park Square Live Music &amp; Coffee"));
    assert!(page.contains("Dueling Pianos Bar"));
    assert!(page.contains("0 upcoming"));
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2035-04-01T20:00").await;
    create_show(&app, venue_id, artist_id, "2019-05-21T21:30").await;

    let response = app
        .oneshot(test_request("GET", &format!("/venues/{venue_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Upcoming Shows (1)"));
    assert!(page.contains("Past Shows (1)"));
    assert!(page.contains("Sun Apr 01, 2035 08:00 PM"));
    assert!(page.contains("Tue May 21, 2019 09:30 PM"));
    assert!(page.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_venue_detail_missing_is_404() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/venues/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("does not exist"));
}

#[tokio::test]
async fn test_venue_search_case_insensitive_substring() {
    let app = setup_app().await;
    create_venue(&app, "The Musical Hop", "San Francisco").await;
    create_venue(&app, "Park Square Live Music & Coffee", "San Francisco").await;
    create_venue(&app, "Dueling Pianos Bar", "New York").await;

    let response = app
        .clone()
        .oneshot(form_request("/venues/search", "search_term=MUSIC"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Found 2 results for \"MUSIC\""));
    assert!(page.contains("The Musical Hop"));
    assert!(!page.contains("Dueling Pianos Bar"));

    // Same search over GET with a query string
    let response = app
        .oneshot(test_request("GET", "/venues/search?search_term=pianos"))
        .await
        .unwrap();
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Found 1 result for \"pianos\""));
}

#[tokio::test]
async fn test_venue_search_empty_term_finds_nothing() {
    let app = setup_app().await;
    create_venue(&app, "The Musical Hop", "San Francisco").await;

    let response = app
        .oneshot(form_request("/venues/search", "search_term="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Found 0 results"));
    assert!(!page.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_edit_venue_updates_and_redirects() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;

    // The edit form comes prefilled with stored values
    let response = app
        .clone()
        .oneshot(test_request("GET", &format!("/venues/{venue_id}/edit")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("value=\"The Musical Hop\""));
    assert!(page.contains("value=\"Jazz, Reggae, Swing\""));

    let response = app
        .clone()
        .oneshot(form_request(
            &format!("/venues/{venue_id}/edit"),
            &venue_form("The Brand New Hop", "Oakland"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with(&format!("/venues/{venue_id}?flash=")));

    let response = app
        .oneshot(test_request("GET", &format!("/venues/{venue_id}")))
        .await
        .unwrap();
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("The Brand New Hop"));
    assert!(page.contains("Oakland"));
    assert!(!page.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2035-04-01T20:00").await;

    let response = app
        .clone()
        .oneshot(test_request("DELETE", &format!("/venues/{venue_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "The Musical Hop");
    assert!(body["redirect"].as_str().unwrap().starts_with("/?flash="));

    // Venue is gone
    let response = app
        .clone()
        .oneshot(test_request("GET", &format!("/venues/{venue_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Its shows went with it
    let response = app
        .clone()
        .oneshot(test_request("GET", "/shows"))
        .await
        .unwrap();
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("No shows are listed yet."));

    // The artist is untouched
    let response = app
        .oneshot(test_request("GET", &format!("/artists/{artist_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_missing_venue_is_404() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("DELETE", "/venues/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Artist Tests
// =============================================================================

#[tokio::test]
async fn test_create_artist_appears_in_listing() {
    let app = setup_app().await;
    let artist_id = create_artist(&app, "Guns N Petals").await;

    let response = app.oneshot(test_request("GET", "/artists")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(&format!("href=\"/artists/{artist_id}\"")));
    assert!(page.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_artist_detail_partitions_shows() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2035-04-01T20:00").await;
    create_show(&app, venue_id, artist_id, "2019-05-21T21:30").await;

    let response = app
        .oneshot(test_request("GET", &format!("/artists/{artist_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Upcoming Shows (1)"));
    assert!(page.contains("Past Shows (1)"));
    assert!(page.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_artist_search_case_insensitive() {
    let app = setup_app().await;
    create_artist(&app, "Guns N Petals").await;
    create_artist(&app, "The Wild Sax Band").await;

    let response = app
        .oneshot(form_request("/artists/search", "search_term=petals"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Found 1 result for \"petals\""));
    assert!(page.contains("Guns N Petals"));
    assert!(!page.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_edit_artist_updates_and_redirects() {
    let app = setup_app().await;
    let artist_id = create_artist(&app, "Guns N Petals").await;

    let response = app
        .clone()
        .oneshot(form_request(
            &format!("/artists/{artist_id}/edit"),
            &artist_form("Guns N Roses Tribute"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with(&format!("/artists/{artist_id}?flash=")));

    let response = app
        .oneshot(test_request("GET", &format!("/artists/{artist_id}")))
        .await
        .unwrap();
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Guns N Roses Tribute"));
}

#[tokio::test]
async fn test_delete_artist_removes_shows_keeps_venue() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2035-04-01T20:00").await;

    let response = app
        .clone()
        .oneshot(test_request("DELETE", &format!("/artists/{artist_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "Guns N Petals");

    let response = app
        .clone()
        .oneshot(test_request("GET", "/shows"))
        .await
        .unwrap();
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("No shows are listed yet."));

    let response = app
        .oneshot(test_request("GET", &format!("/venues/{venue_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Show Tests
// =============================================================================

#[tokio::test]
async fn test_shows_listing_joins_names() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2035-04-01T20:00").await;

    let response = app.oneshot(test_request("GET", "/shows")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(&format!("href=\"/venues/{venue_id}\"")));
    assert!(page.contains(&format!("href=\"/artists/{artist_id}\"")));
    assert!(page.contains("The Musical Hop"));
    assert!(page.contains("Guns N Petals"));
    assert!(page.contains("Sun Apr 01, 2035 08:00 PM"));
}

#[tokio::test]
async fn test_create_show_unknown_venue_rejected() {
    let app = setup_app().await;
    let artist_id = create_artist(&app, "Guns N Petals").await;

    let response = app
        .oneshot(form_request(
            "/shows/create",
            &show_form(99, artist_id, "2035-04-01T20:00"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("no venue with id 99"));
}

#[tokio::test]
async fn test_create_show_bad_start_time_rejected() {
    let app = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;

    let response = app
        .oneshot(form_request(
            "/shows/create",
            &show_form(venue_id, artist_id, "next tuesday"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Invalid start_time"));
}

#[tokio::test]
async fn test_new_show_form_renders() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/shows/create"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("action=\"/shows/create\""));
    assert!(page.contains("name=\"venue_id\""));
    assert!(page.contains("name=\"artist_id\""));
    assert!(page.contains("name=\"start_time\""));
}
