//! Repository for the `exhibitions` table.

use sqlx::PgPool;
use ziranli_core::types::DbId;

use crate::models::exhibition::{CreateExhibition, Exhibition, UpdateExhibition};

const COLUMNS: &str = "id, name, location, description, start_date, end_date, \
    cover_url, created_at, updated_at";

/// Provides CRUD operations for exhibitions.
pub struct ExhibitionRepo;

impl ExhibitionRepo {
    /// Insert a new exhibition, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExhibition,
    ) -> Result<Exhibition, sqlx::Error> {
        let query = format!(
            "INSERT INTO exhibitions
                (name, location, description, start_date, end_date, cover_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find an exhibition by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions WHERE id = $1");
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all exhibitions, most recently created first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Exhibition>(&query).fetch_all(pool).await
    }

    /// Update an exhibition. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExhibition,
    ) -> Result<Option<Exhibition>, sqlx::Error> {
        let query = format!(
            "UPDATE exhibitions SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                description = COALESCE($4, description),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                cover_url = COALESCE($7, cover_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.cover_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exhibition by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exhibitions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
