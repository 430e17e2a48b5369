//! Artist records
//!
//! Mirrors the venue module: colon-delimited genre column, write-time
//! defaults for optional fields, one-query search with upcoming counts.
//! Artists have no street address and seek venues rather than talent.

use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

use crate::error::{AppError, AppResult};

/// Image shown for artists created without one.
pub const DEFAULT_IMAGE_LINK: &str = "https://images.unsplash.com/photo-1526218626217-dc65a29bb444?ixid=MXwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHw%3D&ixlib=rb-1.2.1&auto=format&fit=crop&w=334&q=80";

/// Seeking pitch shown for artists created without one.
pub const DEFAULT_SEEKING_DESCRIPTION: &str =
    "Looking for shows to perform at in the San Francisco Bay Area!";

/// A full artist row.
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    /// Colon-delimited genre list as stored.
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// Validated form data for creating or updating an artist.
#[derive(Debug, Clone)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    /// Colon-delimited genre list, already normalized by the caller.
    pub genres: String,
    pub facebook_link: String,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// One artist link on the listing page.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistRef {
    pub id: i64,
    pub name: String,
}

/// One artist in a search result, with its upcoming-show count.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistEntry {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

/// Insert a new artist and return its id.
pub async fn insert_artist(pool: &SqlitePool, input: &ArtistInput) -> AppResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (name, city, state, phone, genres, facebook_link,
                             image_link, website, seeking_venue, seeking_description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.facebook_link)
    .bind(super::or_default(input.image_link.as_deref(), DEFAULT_IMAGE_LINK))
    .bind(super::or_default(input.website.as_deref(), ""))
    .bind(input.seeking_venue)
    .bind(super::or_default(
        input.seeking_description.as_deref(),
        DEFAULT_SEEKING_DESCRIPTION,
    ))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load one artist by id.
pub async fn get_artist(pool: &SqlitePool, id: i64) -> AppResult<Artist> {
    let query = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ?");
    sqlx::query_as::<_, Artist>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id}")))
}

/// Overwrite an existing artist's fields. The id never changes.
pub async fn update_artist(pool: &SqlitePool, id: i64, input: &ArtistInput) -> AppResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE artists
        SET name = ?, city = ?, state = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website = ?, seeking_venue = ?,
            seeking_description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.facebook_link)
    .bind(super::or_default(input.image_link.as_deref(), DEFAULT_IMAGE_LINK))
    .bind(super::or_default(input.website.as_deref(), ""))
    .bind(input.seeking_venue)
    .bind(super::or_default(
        input.seeking_description.as_deref(),
        DEFAULT_SEEKING_DESCRIPTION,
    ))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("artist {id}")));
    }
    Ok(())
}

/// Delete an artist. Its shows go with it via the FK cascade.
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("artist {id}")));
    }
    Ok(())
}

/// Check whether an artist id exists.
pub async fn artist_exists(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

/// List every artist as a bare (id, name) link, ordered by id.
pub async fn list_artists(pool: &SqlitePool) -> AppResult<Vec<ArtistRef>> {
    let artists = sqlx::query_as::<_, ArtistRef>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Case-insensitive substring search on artist name, ordered by id.
pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> AppResult<Vec<ArtistEntry>> {
    let pattern = format!("%{term}%");
    let entries = sqlx::query_as::<_, ArtistEntry>(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time > ?
        WHERE a.name LIKE ?
        GROUP BY a.id
        ORDER BY a.id
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{shows, venues};
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Setup in-memory test database.
    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        pool
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample_input(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: "Rock n Roll".to_string(),
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            image_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let pool = setup_test_db().await;

        let mut input = sample_input("Guns N Petals");
        input.seeking_venue = true;
        input.website = Some("https://www.gunsnpetalsband.com".to_string());

        let id = insert_artist(&pool, &input).await.unwrap();
        let artist = get_artist(&pool, id).await.unwrap();

        assert_eq!(artist.id, id);
        assert_eq!(artist.name, "Guns N Petals");
        assert_eq!(artist.genres, "Rock n Roll");
        assert_eq!(artist.website, "https://www.gunsnpetalsband.com");
        assert!(artist.seeking_venue);
        // Unsupplied optionals fall back to defaults
        assert_eq!(artist.image_link, DEFAULT_IMAGE_LINK);
        assert_eq!(artist.seeking_description, DEFAULT_SEEKING_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_get_missing_artist_is_not_found() {
        let pool = setup_test_db().await;
        assert!(matches!(
            get_artist(&pool, 7).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_update_changes_fields_and_keeps_id() {
        let pool = setup_test_db().await;

        let id = insert_artist(&pool, &sample_input("Guns N Petals")).await.unwrap();

        let mut updated = sample_input("Guns N Roses Tribute");
        updated.city = "Oakland".to_string();
        updated.genres = "Rock n Roll:Metal".to_string();
        update_artist(&pool, id, &updated).await.unwrap();

        let artist = get_artist(&pool, id).await.unwrap();
        assert_eq!(artist.id, id);
        assert_eq!(artist.name, "Guns N Roses Tribute");
        assert_eq!(artist.city, "Oakland");
        assert_eq!(artist.genres, "Rock n Roll:Metal");
    }

    #[tokio::test]
    async fn test_update_missing_artist_is_not_found() {
        let pool = setup_test_db().await;
        assert!(matches!(
            update_artist(&pool, 7, &sample_input("Ghost")).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let pool = setup_test_db().await;
        let id = insert_artist(&pool, &sample_input("Guns N Petals")).await.unwrap();

        delete_artist(&pool, id).await.unwrap();
        assert!(matches!(
            get_artist(&pool, id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_artists_ordered_by_id() {
        let pool = setup_test_db().await;
        insert_artist(&pool, &sample_input("Matt Quevedo")).await.unwrap();
        insert_artist(&pool, &sample_input("The Wild Sax Band")).await.unwrap();
        insert_artist(&pool, &sample_input("Guns N Petals")).await.unwrap();

        let listed = list_artists(&pool).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].name, "Matt Quevedo");
        assert_eq!(listed[1].name, "The Wild Sax Band");
        assert_eq!(listed[2].name, "Guns N Petals");
    }

    #[tokio::test]
    async fn test_search_counts_only_upcoming_shows() {
        let pool = setup_test_db().await;
        let now = at(2026, 1, 15, 12);

        let artist = insert_artist(&pool, &sample_input("The Wild Sax Band")).await.unwrap();
        let venue = venues::insert_venue(
            &pool,
            &venues::VenueInput {
                name: "Park Square Live Music & Coffee".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "34 Whiskey Moore Ave".to_string(),
                phone: "415-000-1234".to_string(),
                genres: "Jazz".to_string(),
                facebook_link: "https://www.facebook.com/ParkSquare".to_string(),
                image_link: None,
                website: None,
                seeking_talent: false,
                seeking_description: None,
            },
        )
        .await
        .unwrap();

        shows::insert_show(&pool, venue, artist, at(2026, 2, 1, 20)).await.unwrap();
        shows::insert_show(&pool, venue, artist, at(2026, 3, 1, 20)).await.unwrap();
        shows::insert_show(&pool, venue, artist, at(2024, 1, 1, 20)).await.unwrap();

        let results = search_artists(&pool, "wild sax", now).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, artist);
        assert_eq!(results[0].num_upcoming_shows, 2);

        assert!(search_artists(&pool, "nobody", now).await.unwrap().is_empty());
    }
}
