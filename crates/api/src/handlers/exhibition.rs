//! Handlers for the `/exhibitions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ziranli_core::error::CoreError;
use ziranli_core::types::DbId;
use ziranli_db::models::exhibition::{CreateExhibition, Exhibition, UpdateExhibition};
use ziranli_db::repositories::ExhibitionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/exhibitions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExhibition>,
) -> AppResult<(StatusCode, Json<Exhibition>)> {
    let exhibition = ExhibitionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(exhibition)))
}

/// GET /api/v1/exhibitions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Exhibition>>> {
    let exhibitions = ExhibitionRepo::list_all(&state.pool).await?;
    Ok(Json(exhibitions))
}

/// GET /api/v1/exhibitions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Exhibition>> {
    let exhibition = ExhibitionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exhibition",
            id,
        }))?;
    Ok(Json(exhibition))
}

/// PUT /api/v1/exhibitions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExhibition>,
) -> AppResult<Json<Exhibition>> {
    let exhibition = ExhibitionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exhibition",
            id,
        }))?;
    Ok(Json(exhibition))
}

/// DELETE /api/v1/exhibitions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ExhibitionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Exhibition",
            id,
        }))
    }
}
