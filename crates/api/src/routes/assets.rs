//! Route definitions for the dashboard image library.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET  /  -> list CDN files (admin)
/// POST /  -> multipart upload (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(assets::list).post(assets::upload))
}
