//! Exhibition entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ziranli_core::types::{DbId, Timestamp};

/// A row from the `exhibitions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exhibition {
    pub id: DbId,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new exhibition.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExhibition {
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub cover_url: Option<String>,
}

/// DTO for updating an existing exhibition. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExhibition {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub cover_url: Option<String>,
}
