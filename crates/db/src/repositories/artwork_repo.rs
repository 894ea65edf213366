//! Repository for the `artworks` table, including the facet query engine.
//!
//! The seven by-facet catalog operations and the unfiltered listing all
//! go through [`ArtworkRepo::list_filtered`]: one parametrized query whose
//! WHERE clause constrains only the facets present in the filter.

use sqlx::PgPool;
use ziranli_core::facet::FacetFilter;
use ziranli_core::types::DbId;

use crate::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, artist, category, material, size, \
    description, cover_url, created_at, updated_at";

/// Provides CRUD and catalog filter operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, returning the created row.
    ///
    /// Omitted facet values and artist default to the empty string.
    pub async fn create(pool: &PgPool, input: &CreateArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks
                (name, artist, category, material, size, description, cover_url)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                     COALESCE($5, ''), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.name)
            .bind(&input.artist)
            .bind(&input.category)
            .bind(&input.material)
            .bind(&input.size)
            .bind(&input.description)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find an artwork by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List artworks matching the given facet filter, in stable storage
    /// order.
    ///
    /// Absent facets are unconstrained; present facets are matched by
    /// exact, case-sensitive equality. A value matching nothing yields an
    /// empty list, never an error.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &FacetFilter,
    ) -> Result<Vec<Artwork>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artworks
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::TEXT IS NULL OR material = $2)
               AND ($3::TEXT IS NULL OR size = $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.material.as_deref())
            .bind(filter.size.as_deref())
            .fetch_all(pool)
            .await
    }

    /// List every artwork, unfiltered.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Artwork>, sqlx::Error> {
        Self::list_filtered(pool, &FacetFilter::unfiltered()).await
    }

    /// Distinct category values currently present across all artworks.
    pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        Self::distinct_values(pool, "category").await
    }

    /// Distinct material values currently present across all artworks.
    pub async fn distinct_materials(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        Self::distinct_values(pool, "material").await
    }

    /// Distinct size values currently present across all artworks.
    pub async fn distinct_sizes(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        Self::distinct_values(pool, "size").await
    }

    /// Scan one facet column for its distinct values, ordered by value so
    /// the result is deterministic. `column` is always one of the three
    /// facet column names above, never caller input.
    async fn distinct_values(pool: &PgPool, column: &str) -> Result<Vec<String>, sqlx::Error> {
        let query = format!("SELECT DISTINCT {column} FROM artworks ORDER BY {column}");
        sqlx::query_scalar::<_, String>(&query).fetch_all(pool).await
    }

    /// Update an artwork. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtwork,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET
                name = COALESCE($2, name),
                artist = COALESCE($3, artist),
                category = COALESCE($4, category),
                material = COALESCE($5, material),
                size = COALESCE($6, size),
                description = COALESCE($7, description),
                cover_url = COALESCE($8, cover_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.artist)
            .bind(&input.category)
            .bind(&input.material)
            .bind(&input.size)
            .bind(&input.description)
            .bind(&input.cover_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artwork by ID. Returns `true` if a row was removed.
    ///
    /// Owned images go with it via the schema's ON DELETE CASCADE.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
