//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list (public, owner display order)
/// POST   /        -> create (admin)
/// GET    /{slug}  -> get_by_slug (public)
/// PUT    /{id}    -> update (admin)
/// DELETE /{id}    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{key}",
            get(projects::get_by_slug)
                .put(projects::update)
                .delete(projects::delete),
        )
}
