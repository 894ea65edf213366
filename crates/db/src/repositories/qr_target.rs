//! Allow-listed generic lookup for the QR resolver.
//!
//! A QrType row names its lookup target as data (`target_table`,
//! `target_column`). Rather than interpolating those strings into SQL,
//! [`QrTargetRepo::fetch`] dispatches through a closed registry of known
//! (table, column) pairs, each backed by the corresponding typed
//! repository query. Adding a scannable target is a code change here, not
//! a data change.
//!
//! The fetched row is returned as a JSON object (field name to value),
//! since the static type varies with the target table.

use serde::Serialize;
use sqlx::PgPool;
use ziranli_core::types::DbId;

use crate::repositories::{ArtworkRepo, ExhibitionRepo};

/// Registry name for the artworks table.
pub const TARGET_ARTWORK: &str = "artwork";

/// Registry name for the exhibitions table.
pub const TARGET_EXHIBITION: &str = "exhibition";

/// Errors from the generic target lookup.
///
/// `UnknownTable` and `UnknownColumn` mean the QrType metadata does not
/// resolve against the registry. That is curated-configuration breakage,
/// not caller input error, and is surfaced distinctly from "no such row".
#[derive(Debug, thiserror::Error)]
pub enum QrTargetError {
    #[error("no QR lookup registered for table {table:?}")]
    UnknownTable { table: String },

    #[error("column {column:?} is not a registered lookup key for table {table:?}")]
    UnknownColumn { table: String, column: String },

    #[error("failed to serialize {table} row: {source}")]
    Serialize {
        table: &'static str,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Resolves (table, column, subject) triples against registered targets.
pub struct QrTargetRepo;

impl QrTargetRepo {
    /// Fetch the row a QrType's stored metadata points at.
    ///
    /// Returns `Ok(None)` when the target row does not exist. A subject
    /// that cannot be a value of the key column at all (a non-numeric
    /// subject against a numeric key) can match no row and is likewise
    /// `Ok(None)`.
    pub async fn fetch(
        pool: &PgPool,
        table: &str,
        column: &str,
        subject: &str,
    ) -> Result<Option<serde_json::Value>, QrTargetError> {
        tracing::debug!(table, column, subject, "resolving QR target");
        match table {
            TARGET_ARTWORK => match column {
                "id" => {
                    let Some(id) = parse_id(subject) else {
                        return Ok(None);
                    };
                    let row = ArtworkRepo::find_by_id(pool, id).await?;
                    row.map(|r| row_to_json(TARGET_ARTWORK, &r)).transpose()
                }
                _ => Err(QrTargetError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                }),
            },
            TARGET_EXHIBITION => match column {
                "id" => {
                    let Some(id) = parse_id(subject) else {
                        return Ok(None);
                    };
                    let row = ExhibitionRepo::find_by_id(pool, id).await?;
                    row.map(|r| row_to_json(TARGET_EXHIBITION, &r)).transpose()
                }
                _ => Err(QrTargetError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                }),
            },
            _ => Err(QrTargetError::UnknownTable {
                table: table.to_string(),
            }),
        }
    }
}

fn parse_id(subject: &str) -> Option<DbId> {
    subject.parse().ok()
}

fn row_to_json<T: Serialize>(
    table: &'static str,
    row: &T,
) -> Result<serde_json::Value, QrTargetError> {
    serde_json::to_value(row).map_err(|source| QrTargetError::Serialize { table, source })
}
