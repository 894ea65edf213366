//! Artwork image entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ziranli_core::types::{DbId, Timestamp};

/// A row from the `artwork_images` table.
///
/// Images are owned by their artwork; the schema cascades deletes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtworkImage {
    pub id: DbId,
    pub artwork_id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artwork image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtworkImage {
    pub artwork_id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}
