//! Route definitions for artworks, their images, and the catalog filter
//! surface.
//!
//! The catalog paths (`/allArtworks`, `/byType/{type}`, ...) predate this
//! implementation and are kept verbatim for client compatibility.
//! Multi-facet paths carry their values hyphen-joined in one segment;
//! the handler splits them.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{artwork, artwork_image};
use crate::state::AppState;

/// Routes for the `/artworks` resource and the catalog listing surface.
///
/// ```text
/// GET    /artworks                          -> list
/// POST   /artworks                          -> create
/// GET    /artworks/{id}                     -> get_by_id
/// PUT    /artworks/{id}                     -> update
/// DELETE /artworks/{id}                     -> delete
///
/// GET    /artworks/{artwork_id}/images      -> list_by_artwork
/// POST   /artworks/{artwork_id}/images      -> create
/// DELETE /artworks/{artwork_id}/images/{id} -> delete
/// GET    /artwork/images/{id}               -> catalog alias (id = artwork id)
///
/// GET    /allArtworks                       -> unfiltered listing
/// GET    /allTypes /allMaterials /allSizes  -> distinct facet values
/// GET    /byType/{type} ...                 -> single-facet filters
/// GET    /byTypeAndMaterial/{type}-{material} ...  -> multi-facet filters
/// ```
pub fn router() -> Router<AppState> {
    let image_routes = Router::new()
        .route(
            "/",
            get(artwork_image::list_by_artwork).post(artwork_image::create),
        )
        .route("/{id}", delete(artwork_image::delete));

    Router::new()
        // Entity CRUD.
        .route("/artworks", get(artwork::list).post(artwork::create))
        .route(
            "/artworks/{id}",
            get(artwork::get_by_id)
                .put(artwork::update)
                .delete(artwork::delete),
        )
        // Owned images.
        .nest("/artworks/{artwork_id}/images", image_routes)
        .route(
            "/artwork/images/{id}",
            get(artwork_image::list_for_artwork_compat),
        )
        // Catalog listing.
        .route("/allArtworks", get(artwork::list_all_catalog))
        .route("/allTypes", get(artwork::distinct_categories))
        .route("/allMaterials", get(artwork::distinct_materials))
        .route("/allSizes", get(artwork::distinct_sizes))
        .route("/byType/{category}", get(artwork::by_category))
        .route("/byMaterial/{material}", get(artwork::by_material))
        .route("/bySize/{size}", get(artwork::by_size))
        .route(
            "/byTypeAndMaterial/{combo}",
            get(artwork::by_category_and_material),
        )
        .route("/byTypeAndSize/{combo}", get(artwork::by_category_and_size))
        .route(
            "/byMaterialAndSize/{combo}",
            get(artwork::by_material_and_size),
        )
        .route(
            "/byTypeAndMaterialAndSize/{combo}",
            get(artwork::by_all_facets),
        )
}
