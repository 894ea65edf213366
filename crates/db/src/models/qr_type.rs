//! QR type metadata model and DTOs.
//!
//! A QrType row is curated configuration: it describes one class of
//! scannable code by naming the table and identifying column a scanned
//! subject resolves against. Rows are rarely written and frequently read
//! during scans.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ziranli_core::types::{DbId, Timestamp};

/// A row from the `qr_types` table.
///
/// (`target_table`, `target_column`) must name a pair registered with the
/// QR target registry; the resolver rejects anything else at lookup time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QrType {
    pub id: DbId,
    pub name: String,
    pub target_table: String,
    pub target_column: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new QR type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQrType {
    pub name: String,
    pub target_table: String,
    pub target_column: String,
}

/// DTO for updating an existing QR type. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQrType {
    pub name: Option<String>,
    pub target_table: Option<String>,
    pub target_column: Option<String>,
}
