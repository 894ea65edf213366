//! Repository for the `qr_types` table.

use sqlx::PgPool;
use ziranli_core::types::DbId;

use crate::models::qr_type::{CreateQrType, QrType, UpdateQrType};

const COLUMNS: &str = "id, name, target_table, target_column, created_at, updated_at";

/// Provides CRUD operations for QR type metadata.
pub struct QrTypeRepo;

impl QrTypeRepo {
    /// Insert a new QR type, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQrType) -> Result<QrType, sqlx::Error> {
        let query = format!(
            "INSERT INTO qr_types (name, target_table, target_column)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrType>(&query)
            .bind(&input.name)
            .bind(&input.target_table)
            .bind(&input.target_column)
            .fetch_one(pool)
            .await
    }

    /// Find a QR type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QrType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM qr_types WHERE id = $1");
        sqlx::query_as::<_, QrType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all QR types, ordered by ID.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<QrType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM qr_types ORDER BY id");
        sqlx::query_as::<_, QrType>(&query).fetch_all(pool).await
    }

    /// Update a QR type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQrType,
    ) -> Result<Option<QrType>, sqlx::Error> {
        let query = format!(
            "UPDATE qr_types SET
                name = COALESCE($2, name),
                target_table = COALESCE($3, target_table),
                target_column = COALESCE($4, target_column),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.target_table)
            .bind(&input.target_column)
            .fetch_optional(pool)
            .await
    }

    /// Delete a QR type by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM qr_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
