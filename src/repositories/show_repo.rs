//! Repository for the `shows` table.

use sqlx::PgPool;

use crate::models::{NewShow, Show, ShowListing};

const COLUMNS: &str = "id, start_time, artist_id, venue_id";

pub struct ShowRepo;

impl ShowRepo {
    /// Book an artist into a venue. Identical bookings are allowed; the
    /// foreign keys reject ids that do not exist.
    pub async fn create(pool: &PgPool, input: &NewShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (start_time, artist_id, venue_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(input.start_time)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(show)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time",
        )
        .fetch_all(pool)
        .await
    }
}
