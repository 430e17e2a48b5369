//! Show pages: the global listing and the booking form.

use axum::response::Html;

use super::escape;
use crate::db::shows::ShowListing;
use crate::timefmt;

/// Every show, earliest first.
pub fn list_page(shows: &[ShowListing], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Shows</h1>\n");
    body.push_str(
        "<div class=\"actions\"><a class=\"button\" href=\"/shows/create\">Book a show</a></div>\n",
    );

    if shows.is_empty() {
        body.push_str("<p>No shows are listed yet.</p>\n");
    } else {
        body.push_str("<table>\n    <tr><th>Venue</th><th>Artist</th><th>Date</th></tr>\n");
        for show in shows {
            body.push_str(&format!(
                "    <tr><td><a href=\"/venues/{}\">{}</a></td><td><a href=\"/artists/{}\">{}</a></td><td>{}</td></tr>\n",
                show.venue_id,
                escape(&show.venue_name),
                show.artist_id,
                escape(&show.artist_name),
                timefmt::display(&show.start_time),
            ));
        }
        body.push_str("</table>\n");
    }

    super::layout("Shows", flash, &body)
}

/// Booking form. `default_start` prefills the time picker.
pub fn form_page(default_start: &str, flash: Option<&str>) -> Html<String> {
    let body = format!(
        r#"<h1>Book a show</h1>
<p class="meta">Link an existing artist to an existing venue. Both ids appear on their detail pages.</p>
<form method="post" action="/shows/create">
    <label for="venue_id">Venue id</label>
    <input type="number" id="venue_id" name="venue_id" min="1" required>

    <label for="artist_id">Artist id</label>
    <input type="number" id="artist_id" name="artist_id" min="1" required>

    <label for="start_time">Start time</label>
    <input type="datetime-local" id="start_time" name="start_time" value="{}" required>

    <button class="button" type="submit">Book show</button>
</form>"#,
        escape(default_start),
    );

    super::layout("Book a show", flash, &body)
}
