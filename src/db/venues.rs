//! Venue records
//!
//! Venues store their genre list as a single colon-delimited column; use
//! [`crate::genres`] to split it before display. Upcoming-show counts are
//! computed in SQL against a caller-supplied "now" so listing and search
//! need one query each.

use chrono::NaiveDateTime;
use sqlx::{FromRow, Row, SqlitePool};

use crate::error::{AppError, AppResult};

/// Image shown for venues created without one.
pub const DEFAULT_IMAGE_LINK: &str = "https://images.unsplash.com/photo-1507901747481-84a4f64fda6d?ixid=MXwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHw%3D&ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80";

/// Seeking pitch shown for venues created without one.
pub const DEFAULT_SEEKING_DESCRIPTION: &str =
    "We are on the lookout for a local artist to play every two weeks. Please call us.";

/// A full venue row.
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    /// Colon-delimited genre list as stored.
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// Validated form data for creating or updating a venue.
///
/// Optional fields fall back to the column defaults at write time, so a
/// venue created from the minimal form still renders with an image and a
/// seeking pitch.
#[derive(Debug, Clone)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    /// Colon-delimited genre list, already normalized by the caller.
    pub genres: String,
    pub facebook_link: String,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// One venue in a listing or search result, with its upcoming-show count.
#[derive(Debug, Clone, FromRow)]
pub struct VenueEntry {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state) location.
#[derive(Debug, Clone)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueEntry>,
}

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, \
     image_link, facebook_link, website, seeking_talent, seeking_description";

/// Insert a new venue and return its id.
pub async fn insert_venue(pool: &SqlitePool, input: &VenueInput) -> AppResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (name, city, state, address, phone, genres,
                            facebook_link, image_link, website, seeking_talent,
                            seeking_description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.facebook_link)
    .bind(super::or_default(input.image_link.as_deref(), DEFAULT_IMAGE_LINK))
    .bind(super::or_default(input.website.as_deref(), ""))
    .bind(input.seeking_talent)
    .bind(super::or_default(
        input.seeking_description.as_deref(),
        DEFAULT_SEEKING_DESCRIPTION,
    ))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load one venue by id.
pub async fn get_venue(pool: &SqlitePool, id: i64) -> AppResult<Venue> {
    let query = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ?");
    sqlx::query_as::<_, Venue>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id}")))
}

/// Overwrite an existing venue's fields. The id never changes.
pub async fn update_venue(pool: &SqlitePool, id: i64, input: &VenueInput) -> AppResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website = ?, seeking_talent = ?,
            seeking_description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.facebook_link)
    .bind(super::or_default(input.image_link.as_deref(), DEFAULT_IMAGE_LINK))
    .bind(super::or_default(input.website.as_deref(), ""))
    .bind(input.seeking_talent)
    .bind(super::or_default(
        input.seeking_description.as_deref(),
        DEFAULT_SEEKING_DESCRIPTION,
    ))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("venue {id}")));
    }
    Ok(())
}

/// Delete a venue. Its shows go with it via the FK cascade.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("venue {id}")));
    }
    Ok(())
}

/// Check whether a venue id exists.
pub async fn venue_exists(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

/// List every venue grouped by (city, state), each with the count of its
/// shows starting strictly after `now`.
///
/// Areas are ordered by city then state; venues within an area by name.
pub async fn list_grouped(pool: &SqlitePool, now: NaiveDateTime) -> AppResult<Vec<VenueArea>> {
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        GROUP BY v.id
        ORDER BY v.city, v.state, v.name
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    // Rows arrive sorted by location, so each area's venues are adjacent.
    let mut areas: Vec<VenueArea> = Vec::new();
    for row in rows {
        let city: String = row.get("city");
        let state: String = row.get("state");
        let entry = VenueEntry {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        };
        match areas.last_mut() {
            Some(area) if area.city == city && area.state == state => area.venues.push(entry),
            _ => areas.push(VenueArea {
                city,
                state,
                venues: vec![entry],
            }),
        }
    }
    Ok(areas)
}

/// Case-insensitive substring search on venue name, ordered by id.
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> AppResult<Vec<VenueEntry>> {
    let pattern = format!("%{term}%");
    let entries = sqlx::query_as::<_, VenueEntry>(
        r#"
        SELECT v.id, v.name, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        WHERE v.name LIKE ?
        GROUP BY v.id
        ORDER BY v.id
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}
