//! Route definitions for the `/contacts` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /      -> list (admin)
/// POST   /      -> submit (public, rate-limited)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list).post(contacts::submit))
        .route("/{id}", delete(contacts::delete))
}
