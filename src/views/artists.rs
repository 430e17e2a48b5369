//! Artist pages: listing, search results, detail, and the create/edit form.

use axum::response::Html;

use super::escape;
use crate::db::artists::{Artist, ArtistEntry, ArtistRef};
use crate::db::shows::ArtistShow;
use crate::{genres, timefmt};

const DELETE_SCRIPT: &str = r#"<script>
document.getElementById('delete-artist').addEventListener('click', function () {
    if (!confirm('Delete this artist and all of their shows?')) { return; }
    fetch('/artists/' + this.dataset.id, { method: 'DELETE' })
        .then(function (response) {
            if (!response.ok) { throw new Error('delete failed'); }
            return response.json();
        })
        .then(function (data) { window.location.href = data.redirect; })
        .catch(function () { alert('The artist could not be deleted.'); });
});
</script>"#;

fn search_form(term: &str) -> String {
    format!(
        r#"<form method="post" action="/artists/search">
    <input type="text" name="search_term" placeholder="Search artists by name" value="{}">
    <button class="button" type="submit">Search</button>
</form>"#,
        escape(term)
    )
}

/// All artists as a flat list of links.
pub fn list_page(artists: &[ArtistRef], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Artists</h1>\n");
    body.push_str(&search_form(""));
    body.push_str("\n<div class=\"actions\"><a class=\"button\" href=\"/artists/create\">List a new artist</a></div>\n");

    if artists.is_empty() {
        body.push_str("<p>No artists are listed yet.</p>\n");
    } else {
        body.push_str("<ul class=\"plain\">\n");
        for artist in artists {
            body.push_str(&format!(
                "    <li><a href=\"/artists/{}\">{}</a></li>\n",
                artist.id,
                escape(&artist.name),
            ));
        }
        body.push_str("</ul>\n");
    }

    super::layout("Artists", flash, &body)
}

/// Search results for an artist name search.
pub fn search_page(term: &str, results: &[ArtistEntry]) -> Html<String> {
    let plural = if results.len() == 1 { "result" } else { "results" };
    let mut body = String::from("<h1>Artist Search</h1>\n");
    body.push_str(&search_form(term));
    body.push_str(&format!(
        "\n<h2>Found {} {} for \"{}\"</h2>\n<ul class=\"plain\">\n",
        results.len(),
        plural,
        escape(term)
    ));
    for artist in results {
        body.push_str(&format!(
            "    <li><a href=\"/artists/{}\">{}</a><span class=\"badge\">{} upcoming</span></li>\n",
            artist.id,
            escape(&artist.name),
            artist.num_upcoming_shows,
        ));
    }
    body.push_str("</ul>\n");

    super::layout("Artist Search", None, &body)
}

fn shows_section(title: &str, shows: &[ArtistShow]) -> String {
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
        <p><a href="/venues/{id}">{name}</a></p>
        <p class="meta">{time}</p>
    </div>
"#,
            image = escape(&show.venue_image_link),
            id = show.venue_id,
            name = escape(&show.venue_name),
            time = timefmt::display(&show.start_time),
        ));
    }
    section.push_str("</div>\n");
    section
}

/// One artist with their shows split into upcoming and past.
pub fn detail_page(
    artist: &Artist,
    past: &[ArtistShow],
    upcoming: &[ArtistShow],
    flash: Option<&str>,
) -> Html<String> {
    let genre_badges: String = genres::split(&artist.genres)
        .iter()
        .map(|g| format!("<span class=\"genre\">{}</span>", escape(g)))
        .collect();

    let website = if artist.website.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"meta\">Website: <a href=\"{0}\">{0}</a></p>\n",
            escape(&artist.website)
        )
    };
    let facebook = if artist.facebook_link.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"meta\">Facebook: <a href=\"{0}\">{0}</a></p>\n",
            escape(&artist.facebook_link)
        )
    };
    let seeking = if artist.seeking_venue {
        format!(
            "<div class=\"seeking\">Seeking venues: {}</div>\n",
            escape(&artist.seeking_description)
        )
    } else {
        String::new()
    };

    let mut body = format!(
        r#"<h1>{name}</h1>
<p>{genre_badges}</p>
<p class="meta">{city}, {state}</p>
<p class="meta">{phone}</p>
{website}{facebook}<img class="portrait" src="{image}" alt="{name}">
{seeking}"#,
        name = escape(&artist.name),
        genre_badges = genre_badges,
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = website,
        facebook = facebook,
        image = escape(&artist.image_link),
        seeking = seeking,
    );

    body.push_str(&shows_section("Upcoming Shows", upcoming));
    body.push_str(&shows_section("Past Shows", past));
    body.push_str(&format!(
        r#"<div class="actions">
    <a class="button" href="/artists/{id}/edit">Edit artist</a>
    <button class="button danger" id="delete-artist" data-id="{id}">Delete artist</button>
</div>
"#,
        id = artist.id,
    ));
    body.push_str(DELETE_SCRIPT);

    super::layout(&artist.name, flash, &body)
}

/// Create form (no existing artist) or edit form (prefilled).
pub fn form_page(existing: Option<&Artist>, flash: Option<&str>) -> Html<String> {
    let (title, action, button) = match existing {
        Some(artist) => (
            "Edit artist",
            format!("/artists/{}/edit", artist.id),
            "Save changes",
        ),
        None => (
            "List a new artist",
            "/artists/create".to_string(),
            "List artist",
        ),
    };

    let name = existing.map(|a| escape(&a.name)).unwrap_or_default();
    let city = existing.map(|a| escape(&a.city)).unwrap_or_default();
    let state = existing.map(|a| escape(&a.state)).unwrap_or_default();
    let phone = existing.map(|a| escape(&a.phone)).unwrap_or_default();
    let genres_value = existing
        .map(|a| escape(&genres::split(&a.genres).join(", ")))
        .unwrap_or_default();
    let facebook = existing.map(|a| escape(&a.facebook_link)).unwrap_or_default();
    let image = existing.map(|a| escape(&a.image_link)).unwrap_or_default();
    let website = existing.map(|a| escape(&a.website)).unwrap_or_default();
    let seeking_description = existing
        .map(|a| escape(&a.seeking_description))
        .unwrap_or_default();
    let checked = if existing.is_some_and(|a| a.seeking_venue) {
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

    <label for="phone">Phone</label>
    <input type="text" id="phone" name="phone" value="{phone}" required>

    <label for="genres">Genres (comma separated)</label>
    <input type="text" id="genres" name="genres" value="{genres_value}" placeholder="Rock n Roll, Blues" required>

    <label for="facebook_link">Facebook link</label>
    <input type="text" id="facebook_link" name="facebook_link" value="{facebook}" required>

    <label for="image_link">Image link</label>
    <input type="text" id="image_link" name="image_link" value="{image}">

    <label for="website">Website</label>
    <input type="text" id="website" name="website" value="{website}">

    <div class="checkbox-row">
        <input type="checkbox" id="seeking_venue" name="seeking_venue"{checked}>
        <label for="seeking_venue">Currently seeking performance venues</label>
    </div>

    <label for="seeking_description">Seeking description</label>
    <input type="text" id="seeking_description" name="seeking_description" value="{seeking_description}">

    <button class="button" type="submit">{button}</button>
</form>"#,
    );

    super::layout(title, flash, &body)
}
