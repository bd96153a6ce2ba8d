//! Route definitions for the admin user's preferences.

use axum::routing::put;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// PUT /order  -> replace the project display order (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/order", put(user::update_order))
}
