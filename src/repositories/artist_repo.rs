//! Repository for the `artists` table.

use sqlx::PgPool;

use super::contains_pattern;
use crate::models::{Artist, ArtistInput, ArtistShow, ArtistSummary};

const COLUMNS: &str = "id, name, city, state, phone, image_link, facebook_link, website, \
     genres, seeking_venue, seeking_description";

pub struct ArtistRepo;

impl ArtistRepo {
    pub async fn create(pool: &PgPool, input: &ArtistInput) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, image_link, facebook_link,
                                  website, genres, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(artist)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT id, name FROM artists WHERE name ILIKE $1 ORDER BY id",
        )
        .bind(contains_pattern(term))
        .fetch_all(pool)
        .await
    }

    /// Shows an artist is booked into, with the venue's name and image.
    pub async fn list_shows(pool: &PgPool, artist_id: i32) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_choices(pool: &PgPool) -> Result<Vec<(i32, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM artists ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column. Returns `None` if no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &ArtistInput,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                image_link = $6,
                facebook_link = $7,
                website = $8,
                genres = $9,
                seeking_venue = $10,
                seeking_description = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(artist)
    }
}
