//! Homepage

use axum::response::Html;

/// Landing page with links into the three sections.
pub fn home_page(flash: Option<&str>) -> Html<String> {
    let body = r#"<h1>Marquee</h1>
<p class="meta">Where musical artists meet musical venues.</p>

<h2>Browse</h2>
<div class="actions">
    <a class="button" href="/venues">Find a venue</a>
    <a class="button" href="/artists">Find an artist</a>
    <a class="button" href="/shows">Find a show</a>
</div>

<h2>Publish</h2>
<div class="actions">
    <a class="button" href="/venues/create">List a venue</a>
    <a class="button" href="/artists/create">List an artist</a>
    <a class="button" href="/shows/create">List a show</a>
</div>"#;

    super::layout("Home", flash, body)
}
