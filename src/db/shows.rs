//! Show records
//!
//! A show is a booking linking one artist to one venue at a start time.
//! Shows are never edited or deleted on their own; they disappear when
//! either side of the booking is deleted.

use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

use crate::error::AppResult;

/// A show as rendered on a venue page: the artist side plus the time.
#[derive(Debug, Clone, FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// A show as rendered on an artist page: the venue side plus the time.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: NaiveDateTime,
}

/// A show on the global listing page, with both sides joined in.
#[derive(Debug, Clone, FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Insert a new show and return its id.
///
/// Both FKs are NOT NULL with enforcement on, so a dangling venue or
/// artist id fails here; callers check existence first to report it as
/// a form error rather than a database failure.
pub async fn insert_show(
    pool: &SqlitePool,
    venue_id: i64,
    artist_id: i64,
    start_time: NaiveDateTime,
) -> AppResult<i64> {
    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(venue_id)
        .bind(artist_id)
        .bind(start_time)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// All shows booked at one venue, earliest first.
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: i64) -> AppResult<Vec<VenueShow>> {
    let shows = sqlx::query_as::<_, VenueShow>(
        r#"
        SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// All shows booked for one artist, earliest first.
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: i64) -> AppResult<Vec<ArtistShow>> {
    let shows = sqlx::query_as::<_, ArtistShow>(
        r#"
        SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// Every show with both sides joined in, earliest first.
pub async fn list_shows(pool: &SqlitePool) -> AppResult<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT s.venue_id, v.name AS venue_name, s.artist_id,
               a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// Split shows into (past, upcoming) around `now`.
///
/// Only a show starting strictly after `now` is upcoming; one starting
/// exactly at `now` is already past. Input order is preserved within
/// each half.
pub fn partition_shows<T, F>(shows: Vec<T>, now: NaiveDateTime, start_time: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> NaiveDateTime,
{
    shows.into_iter().partition(|show| start_time(show) <= now)
}
