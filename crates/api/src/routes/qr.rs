//! Route definitions for QR type metadata and scan resolution.

use axum::routing::get;
use axum::Router;

use crate::handlers::qr;
use crate::state::AppState;

/// Routes mounted at `/qr-types` and `/qrcode`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/qr-types", get(qr::list).post(qr::create))
        .route(
            "/qr-types/{id}",
            get(qr::get_by_id).put(qr::update).delete(qr::delete),
        )
        .route("/qrcode/{key}", get(qr::resolve_scan))
}
