//! Repository for the `artwork_images` table.

use sqlx::PgPool;
use ziranli_core::types::DbId;

use crate::models::artwork_image::{ArtworkImage, CreateArtworkImage};

const COLUMNS: &str = "id, artwork_id, image_url, caption, sort_order, created_at, updated_at";

/// Provides CRUD operations for artwork images.
pub struct ArtworkImageRepo;

impl ArtworkImageRepo {
    /// Insert a new image, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to 0.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArtworkImage,
    ) -> Result<ArtworkImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO artwork_images (artwork_id, image_url, caption, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkImage>(&query)
            .bind(input.artwork_id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List the image set for one artwork, in display order.
    pub async fn list_by_artwork(
        pool: &PgPool,
        artwork_id: DbId,
    ) -> Result<Vec<ArtworkImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artwork_images
             WHERE artwork_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, ArtworkImage>(&query)
            .bind(artwork_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artwork_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
