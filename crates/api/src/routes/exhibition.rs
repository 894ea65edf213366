//! Route definitions for exhibitions.

use axum::routing::get;
use axum::Router;

use crate::handlers::exhibition;
use crate::state::AppState;

/// Routes mounted at `/exhibitions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exhibitions", get(exhibition::list).post(exhibition::create))
        .route(
            "/exhibitions/{id}",
            get(exhibition::get_by_id)
                .put(exhibition::update)
                .delete(exhibition::delete),
        )
}
