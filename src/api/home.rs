//! Homepage route

use axum::extract::Query;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::api::FlashParams;
use crate::views;
use crate::AppState;

/// GET /
pub async fn home_page(Query(params): Query<FlashParams>) -> Html<String> {
    views::home::home_page(params.flash.as_deref())
}

/// Build homepage routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home_page))
}
