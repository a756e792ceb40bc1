//! Repository for the `venues` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::{Venue, VenueInput, VenueShow, VenueSummary};

const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
     website, genres, seeking_talent, seeking_description";

/// Summary projection; `$1` is the reference instant for "upcoming".
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.city, v.state, \
        COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows \
     FROM venues v \
     LEFT JOIN shows s ON s.venue_id = v.id";

pub struct VenueRepo;

impl VenueRepo {
    pub async fn create(pool: &PgPool, input: &VenueInput) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                 website, genres, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(venue)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await
    }

    /// All venues with their upcoming show counts, ordered so that venues in
    /// the same `(city, state)` are adjacent.
    pub async fn list_summaries(
        pool: &PgPool,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             GROUP BY v.id
             ORDER BY v.state, v.city, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             WHERE v.name ILIKE $2
             GROUP BY v.id
             ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Shows booked at a venue, with the performing artist's name and image.
    pub async fn list_shows(pool: &PgPool, venue_id: i32) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Id/name pairs for populating selection lists.
    pub async fn list_choices(pool: &PgPool) -> Result<Vec<(i32, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM venues ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column. Returns `None` if no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &VenueInput,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                genres = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(venue)
    }

    /// Delete a venue; its shows go with it through the foreign key cascade.
    /// Returns the deleted venue's name, or `None` if no row had this id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let name = sqlx::query_scalar::<_, String>("DELETE FROM venues WHERE id = $1 RETURNING name")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(name)
    }
}
