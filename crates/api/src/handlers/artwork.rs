//! Handlers for the `/artworks` resource and the catalog filter surface.
//!
//! The catalog routes (`/allArtworks`, `/byType/{type}`, ...) keep their
//! historical path names. Multi-facet routes receive their values
//! hyphen-joined in a single path segment; the router matches whole
//! segments, so the values are split here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ziranli_core::error::CoreError;
use ziranli_core::facet::{split_facet_segment, FacetFilter};
use ziranli_core::types::DbId;
use ziranli_db::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};
use ziranli_db::repositories::ArtworkRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/artworks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtwork>,
) -> AppResult<(StatusCode, Json<Artwork>)> {
    let artwork = ArtworkRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

/// GET /api/v1/artworks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Artwork>>> {
    let artworks = ArtworkRepo::list_all(&state.pool).await?;
    Ok(Json(artworks))
}

/// GET /api/v1/artworks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artwork>> {
    let artwork = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    Ok(Json(artwork))
}

/// PUT /api/v1/artworks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtwork>,
) -> AppResult<Json<Artwork>> {
    let artwork = ArtworkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    Ok(Json(artwork))
}

/// DELETE /api/v1/artworks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ArtworkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Catalog listing (facet query engine)
// ---------------------------------------------------------------------------

/// GET /api/v1/allArtworks
pub async fn list_all_catalog(State(state): State<AppState>) -> AppResult<Json<Vec<Artwork>>> {
    let artworks = ArtworkRepo::list_all(&state.pool).await?;
    Ok(Json(artworks))
}

/// GET /api/v1/allTypes
pub async fn distinct_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(ArtworkRepo::distinct_categories(&state.pool).await?))
}

/// GET /api/v1/allMaterials
pub async fn distinct_materials(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(ArtworkRepo::distinct_materials(&state.pool).await?))
}

/// GET /api/v1/allSizes
pub async fn distinct_sizes(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(ArtworkRepo::distinct_sizes(&state.pool).await?))
}

/// GET /api/v1/byType/{type}
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    list_filtered(&state, FacetFilter::unfiltered().with_category(category)).await
}

/// GET /api/v1/byMaterial/{material}
pub async fn by_material(
    State(state): State<AppState>,
    Path(material): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    list_filtered(&state, FacetFilter::unfiltered().with_material(material)).await
}

/// GET /api/v1/bySize/{size}
pub async fn by_size(
    State(state): State<AppState>,
    Path(size): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    list_filtered(&state, FacetFilter::unfiltered().with_size(size)).await
}

/// GET /api/v1/byTypeAndMaterial/{type}-{material}
pub async fn by_category_and_material(
    State(state): State<AppState>,
    Path(combo): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    let [category, material] = split_combo::<2>(&combo)?;
    list_filtered(
        &state,
        FacetFilter::unfiltered()
            .with_category(category)
            .with_material(material),
    )
    .await
}

/// GET /api/v1/byTypeAndSize/{type}-{size}
pub async fn by_category_and_size(
    State(state): State<AppState>,
    Path(combo): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    let [category, size] = split_combo::<2>(&combo)?;
    list_filtered(
        &state,
        FacetFilter::unfiltered().with_category(category).with_size(size),
    )
    .await
}

/// GET /api/v1/byMaterialAndSize/{material}-{size}
pub async fn by_material_and_size(
    State(state): State<AppState>,
    Path(combo): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    let [material, size] = split_combo::<2>(&combo)?;
    list_filtered(
        &state,
        FacetFilter::unfiltered().with_material(material).with_size(size),
    )
    .await
}

/// GET /api/v1/byTypeAndMaterialAndSize/{type}-{material}-{size}
pub async fn by_all_facets(
    State(state): State<AppState>,
    Path(combo): Path<String>,
) -> AppResult<Json<Vec<Artwork>>> {
    let [category, material, size] = split_combo::<3>(&combo)?;
    list_filtered(
        &state,
        FacetFilter::unfiltered()
            .with_category(category)
            .with_material(material)
            .with_size(size),
    )
    .await
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn list_filtered(state: &AppState, filter: FacetFilter) -> AppResult<Json<Vec<Artwork>>> {
    let artworks = ArtworkRepo::list_filtered(&state.pool, &filter).await?;
    Ok(Json(artworks))
}

fn split_combo<const N: usize>(segment: &str) -> Result<[&str; N], AppError> {
    split_facet_segment::<N>(segment).ok_or_else(|| {
        AppError::BadRequest(format!(
            "expected {N} hyphen-joined facet values, got {segment:?}"
        ))
    })
}
