//! Handlers for the `/artworks/{artwork_id}/images` resource.
//!
//! Images are owned by their artwork. The historical catalog path
//! `GET /artwork/images/{id}` (id is the ARTWORK id) is kept as an alias
//! for the nested listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ziranli_core::error::CoreError;
use ziranli_core::types::DbId;
use ziranli_db::models::artwork_image::{ArtworkImage, CreateArtworkImage};
use ziranli_db::repositories::{ArtworkImageRepo, ArtworkRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/artworks/{artwork_id}/images
///
/// Overrides `input.artwork_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
    Json(mut input): Json<CreateArtworkImage>,
) -> AppResult<(StatusCode, Json<ArtworkImage>)> {
    input.artwork_id = artwork_id;
    let image = ArtworkImageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /api/v1/artworks/{artwork_id}/images
pub async fn list_by_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<Json<Vec<ArtworkImage>>> {
    list_for_artwork_inner(&state, artwork_id).await
}

/// GET /api/v1/artwork/images/{id}
///
/// Catalog alias for the nested listing; `id` is the artwork id.
pub async fn list_for_artwork_compat(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<Json<Vec<ArtworkImage>>> {
    list_for_artwork_inner(&state, artwork_id).await
}

/// DELETE /api/v1/artworks/{artwork_id}/images/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_artwork_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ArtworkImageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ArtworkImage",
            id,
        }))
    }
}

/// Listing the image set of a missing artwork is a 404, not an empty list.
async fn list_for_artwork_inner(
    state: &AppState,
    artwork_id: DbId,
) -> AppResult<Json<Vec<ArtworkImage>>> {
    if ArtworkRepo::find_by_id(&state.pool, artwork_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id: artwork_id,
        }));
    }
    let images = ArtworkImageRepo::list_by_artwork(&state.pool, artwork_id).await?;
    Ok(Json(images))
}
