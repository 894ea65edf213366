//! Handlers for QR type metadata CRUD and scan resolution.
//!
//! Resolution is a three-step pipeline: decode the scan key, load the
//! QrType metadata, then fetch the target row through the allow-listed
//! registry. Decode failures are 400s and unknown QrType ids are 404s; a
//! missing target row is a normal outcome (`data: null`), while metadata
//! naming an unregistered target is a 500.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use ziranli_core::error::CoreError;
use ziranli_core::qr::parse_scan_key;
use ziranli_core::types::DbId;
use ziranli_db::models::qr_type::{CreateQrType, QrType, UpdateQrType};
use ziranli_db::repositories::{QrTargetRepo, QrTypeRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of resolving a scan key: the QrType metadata plus the target
/// row (if any) as a JSON object.
#[derive(Debug, Serialize)]
pub struct ScanResolution {
    #[serde(rename = "qrType")]
    pub qr_type: QrType,
    pub data: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Scan resolution
// ---------------------------------------------------------------------------

/// GET /api/v1/qrcode/{key}
pub async fn resolve_scan(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ScanResolution>> {
    let scan = parse_scan_key(&key)?;

    let qr_type = QrTypeRepo::find_by_id(&state.pool, scan.qr_type_id)
        .await?
        .ok_or(AppError::UnknownQrType(scan.qr_type_id))?;

    let data = QrTargetRepo::fetch(
        &state.pool,
        &qr_type.target_table,
        &qr_type.target_column,
        &scan.subject,
    )
    .await?;

    Ok(Json(ScanResolution { qr_type, data }))
}

// ---------------------------------------------------------------------------
// QrType CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/qr-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQrType>,
) -> AppResult<(StatusCode, Json<QrType>)> {
    let qr_type = QrTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(qr_type)))
}

/// GET /api/v1/qr-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<QrType>>> {
    let qr_types = QrTypeRepo::list_all(&state.pool).await?;
    Ok(Json(qr_types))
}

/// GET /api/v1/qr-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QrType>> {
    let qr_type = QrTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QrType",
            id,
        }))?;
    Ok(Json(qr_type))
}

/// PUT /api/v1/qr-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQrType>,
) -> AppResult<Json<QrType>> {
    let qr_type = QrTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QrType",
            id,
        }))?;
    Ok(Json(qr_type))
}

/// DELETE /api/v1/qr-types/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = QrTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "QrType",
            id,
        }))
    }
}
