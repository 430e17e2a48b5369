//! Venue pages: grouped listing, search results, detail, and the
//! create/edit form.

use axum::response::Html;

use super::escape;
use crate::db::shows::VenueShow;
use crate::db::venues::{Venue, VenueArea, VenueEntry};
use crate::{genres, timefmt};

/// Delete button wiring. Kept out of the `format!` template so the JS
/// braces stay readable; the button carries its id in a data attribute.
const DELETE_SCRIPT: &str = r#"<script>
document.getElementById('delete-venue').addEventListener('click', function () {
    if (!confirm('Delete this venue and all of its shows?')) { return; }
    fetch('/venues/' + this.dataset.id, { method: 'DELETE' })
        .then(function (response) {
            if (!response.ok) { throw new Error('delete failed'); }
            return response.json();
        })
        .then(function (data) { window.location.href = data.redirect; })
        .catch(function () { alert('The venue could not be deleted.'); });
});
</script>"#;

fn search_form(term: &str) -> String {
    format!(
        r#"<form method="post" action="/venues/search">
    <input type="text" name="search_term" placeholder="Search venues by name" value="{}">
    <button class="button" type="submit">Search</button>
</form>"#,
        escape(term)
    )
}

/// All venues grouped by (city, state).
pub fn list_page(areas: &[VenueArea], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Venues</h1>\n");
    body.push_str(&search_form(""));
    body.push_str("\n<div class=\"actions\"><a class=\"button\" href=\"/venues/create\">List a new venue</a></div>\n");

    if areas.is_empty() {
        body.push_str("<p>No venues are listed yet.</p>\n");
    }
    for area in areas {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul class=\"plain\">\n",
            escape(&area.city),
            escape(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&format!(
                "    <li><a href=\"/venues/{}\">{}</a><span class=\"badge\">{} upcoming</span></li>\n",
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows,
            ));
        }
        body.push_str("</ul>\n");
    }

    super::layout("Venues", flash, &body)
}

/// Search results for a venue name search.
pub fn search_page(term: &str, results: &[VenueEntry]) -> Html<String> {
    let plural = if results.len() == 1 { "result" } else { "results" };
    let mut body = String::from("<h1>Venue Search</h1>\n");
    body.push_str(&search_form(term));
    body.push_str(&format!(
        "\n<h2>Found {} {} for \"{}\"</h2>\n<ul class=\"plain\">\n",
        results.len(),
        plural,
        escape(term)
    ));
    for venue in results {
        body.push_str(&format!(
            "    <li><a href=\"/venues/{}\">{}</a><span class=\"badge\">{} upcoming</span></li>\n",
            venue.id,
            escape(&venue.name),
            venue.num_upcoming_shows,
        ));
    }
    body.push_str("</ul>\n");

    super::layout("Venue Search", None, &body)
}

fn shows_section(title: &str, shows: &[VenueShow]) -> String {
    let mut section = format!("<h2>{} ({})</h2>\n", title, shows.len());
    if shows.is_empty() {
        section.push_str("<p class=\"meta\">No shows.</p>\n");
        return section;
    }

    section.push_str("<div class=\"cards\">\n");
    for show in shows {
        section.push_str(&format!(
            r#"    <div class="card">
        <img src="{image}" alt="{name}">
        <p><a href="/artists/{id}">{name}</a></p>
        <p class="meta">{time}</p>
    </div>
"#,
            image = escape(&show.artist_image_link),
            id = show.artist_id,
            name = escape(&show.artist_name),
            time = timefmt::display(&show.start_time),
        ));
    }
    section.push_str("</div>\n");
    section
}

/// One venue with its shows split into upcoming and past.
pub fn detail_page(
    venue: &Venue,
    past: &[VenueShow],
    upcoming: &[VenueShow],
    flash: Option<&str>,
) -> Html<String> {
    let genre_badges: String = genres::split(&venue.genres)
        .iter()
        .map(|g| format!("<span class=\"genre\">{}</span>", escape(g)))
        .collect();

    let website = if venue.website.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"meta\">Website: <a href=\"{0}\">{0}</a></p>\n",
            escape(&venue.website)
        )
    };
    let facebook = if venue.facebook_link.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"meta\">Facebook: <a href=\"{0}\">{0}</a></p>\n",
            escape(&venue.facebook_link)
        )
    };
    let seeking = if venue.seeking_talent {
        format!(
            "<div class=\"seeking\">Seeking talent: {}</div>\n",
            escape(&venue.seeking_description)
        )
    } else {
        String::new()
    };

    let mut body = format!(
        r#"<h1>{name}</h1>
<p>{genre_badges}</p>
<p class="meta">{city}, {state}</p>
<p class="meta">{address}</p>
<p class="meta">{phone}</p>
{website}{facebook}<img class="portrait" src="{image}" alt="{name}">
{seeking}"#,
        name = escape(&venue.name),
        genre_badges = genre_badges,
        city = escape(&venue.city),
        state = escape(&venue.state),
        address = escape(&venue.address),
        phone = escape(&venue.phone),
        website = website,
        facebook = facebook,
        image = escape(&venue.image_link),
        seeking = seeking,
    );

    body.push_str(&shows_section("Upcoming Shows", upcoming));
    body.push_str(&shows_section("Past Shows", past));
    body.push_str(&format!(
        r#"<div class="actions">
    <a class="button" href="/venues/{id}/edit">Edit venue</a>
    <button class="button danger" id="delete-venue" data-id="{id}">Delete venue</button>
</div>
"#,
        id = venue.id,
    ));
    body.push_str(DELETE_SCRIPT);

    super::layout(&venue.name, flash, &body)
}

/// Create form (no existing venue) or edit form (prefilled).
pub fn form_page(existing: Option<&Venue>, flash: Option<&str>) -> Html<String> {
    let (title, action, button) = match existing {
        Some(venue) => (
            "Edit venue",
            format!("/venues/{}/edit", venue.id),
            "Save changes",
        ),
        None => ("List a new venue", "/venues/create".to_string(), "List venue"),
    };

    let name = existing.map(|v| escape(&v.name)).unwrap_or_default();
    let city = existing.map(|v| escape(&v.city)).unwrap_or_default();
    let state = existing.map(|v| escape(&v.state)).unwrap_or_default();
    let address = existing.map(|v| escape(&v.address)).unwrap_or_default();
    let phone = existing.map(|v| escape(&v.phone)).unwrap_or_default();
    let genres_value = existing
        .map(|v| escape(&genres::split(&v.genres).join(", ")))
        .unwrap_or_default();
    let facebook = existing.map(|v| escape(&v.facebook_link)).unwrap_or_default();
    let image = existing.map(|v| escape(&v.image_link)).unwrap_or_default();
    let website = existing.map(|v| escape(&v.website)).unwrap_or_default();
    let seeking_description = existing
        .map(|v| escape(&v.seeking_description))
        .unwrap_or_default();
    let checked = if existing.is_some_and(|v| v.seeking_talent) {
        " checked"
    } else {
        ""
    };

    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
    <label for="name">Name</label>
    <input type="text" id="name" name="name" value="{name}" required>

    <label for="city">City</label>
    <input type="text" id="city" name="city" value="{city}" required>

    <label for="state">State</label>
    <input type="text" id="state" name="state" value="{state}" required>

    <label for="address">Address</label>
    <input type="text" id="address" name="address" value="{address}" required>

    <label for="phone">Phone</label>
    <input type="text" id="phone" name="phone" value="{phone}" required>

    <label for="genres">Genres (comma separated)</label>
    <input type="text" id="genres" name="genres" value="{genres_value}" placeholder="Jazz, Classical" required>

    <label for="facebook_link">Facebook link</label>
    <input type="text" id="facebook_link" name="facebook_link" value="{facebook}" required>

    <label for="image_link">Image link</label>
    <input type="text" id="image_link" name="image_link" value="{image}">

    <label for="website">Website</label>
    <input type="text" id="website" name="website" value="{website}">

    <div class="checkbox-row">
        <input type="checkbox" id="seeking_talent" name="seeking_talent"{checked}>
        <label for="seeking_talent">Currently seeking talent</label>
    </div>

    <label for="seeking_description">Seeking description</label>
    <input type="text" id="seeking_description" name="seeking_description" value="{seeking_description}">

    <button class="button" type="submit">{button}</button>
</form>"#,
    );

    super::layout(title, flash, &body)
}
