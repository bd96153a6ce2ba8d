pub mod assets;
pub mod auth;
pub mod contacts;
pub mod health;
pub mod projects;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                    ordered list (public), create (admin)
/// /projects/{slug}             detail by slug (public)
/// /projects/{id}               update, delete (admin)
///
/// /contacts                    submit (public, rate-limited), list (admin)
/// /contacts/{id}               delete (admin)
///
/// /user/order                  replace display order (admin)
///
/// /auth/google/callback        OAuth exchange (public)
/// /auth/me                     verified identity (admin)
/// /auth/logout                 clear session cookie (admin)
///
/// /assets                      list CDN files, upload (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/contacts", contacts::router())
        .nest("/user", user::router())
        .nest("/auth", auth::router())
        .nest("/assets", assets::router())
}
