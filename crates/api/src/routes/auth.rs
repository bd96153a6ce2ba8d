//! Route definitions for authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// GET  /google/callback  -> OAuth code exchange (public)
/// GET  /me               -> verified identity (admin)
/// POST /logout           -> clear session cookie (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/google/callback", get(auth::google_callback))
        .route("/me", get(auth::me))
        .route("/logout", post(auth::logout))
}
