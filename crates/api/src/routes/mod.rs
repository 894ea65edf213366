//! Route definitions.

pub mod artwork;
pub mod exhibition;
pub mod health;
pub mod qr;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artworks                              list, create
/// /artworks/{id}                         get, update, delete
/// /artworks/{artwork_id}/images          list, create
/// /artworks/{artwork_id}/images/{id}     delete
///
/// /artwork/images/{id}                   image set for an artwork (catalog alias)
/// /allArtworks                           unfiltered catalog listing
/// /allTypes                              distinct category values
/// /allMaterials                          distinct material values
/// /allSizes                              distinct size values
/// /byType/{type}                         single-facet filters
/// /byMaterial/{material}
/// /bySize/{size}
/// /byTypeAndMaterial/{type}-{material}   two-facet filters (hyphen-joined)
/// /byTypeAndSize/{type}-{size}
/// /byMaterialAndSize/{material}-{size}
/// /byTypeAndMaterialAndSize/{type}-{material}-{size}
///
/// /exhibitions                           list, create
/// /exhibitions/{id}                      get, update, delete
///
/// /qr-types                              list, create
/// /qr-types/{id}                         get, update, delete
/// /qrcode/{key}                          scan resolution
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(artwork::router())
        .merge(exhibition::router())
        .merge(qr::router())
}
