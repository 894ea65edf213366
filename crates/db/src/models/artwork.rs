//! Artwork entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ziranli_core::types::{DbId, Timestamp};

/// A row from the `artworks` table.
///
/// The three facet columns (`category`, `material`, `size`) are free text;
/// the catalog filter endpoints match them by exact equality.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub name: String,
    pub artist: String,
    pub category: String,
    pub material: String,
    pub size: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artwork.
///
/// Omitted facet values default to the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtwork {
    pub name: String,
    pub artist: Option<String>,
    pub category: Option<String>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

/// DTO for updating an existing artwork. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtwork {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub category: Option<String>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}
