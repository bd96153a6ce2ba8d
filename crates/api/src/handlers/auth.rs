//! Handlers for OAuth sign-in, session introspection, and logout.

use atelier_core::error::CoreError;
use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::Json;
use serde::Deserialize;

use atelier_db::models::admin_user::{AdminUser, UpsertAdminUser};
use atelier_db::repositories::AdminUserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::SESSION_COOKIE;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// Query parameters of the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// GET /api/v1/auth/google/callback
///
/// Exchanges the authorization code, verifies the email against the
/// allow-list, upserts the admin row, and redirects to the dashboard
/// with an http-only session cookie. Every failure redirects back to the
/// login page instead of surfacing an error body.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> axum::response::Response {
    let Some(code) = query.code else {
        return Redirect::to(&login_url(&state)).into_response();
    };

    match complete_sign_in(&state, &code).await {
        Ok(token) => {
            let cookie = format!(
                "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
                state.config.jwt.token_expiry_secs
            );
            (
                AppendHeaders([(SET_COOKIE, cookie)]),
                Redirect::to(&dashboard_url(&state)),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Google sign-in failed");
            Redirect::to(&login_url(&state)).into_response()
        }
    }
}

/// Run the full exchange: code -> access token -> profile -> allow-list
/// check -> admin upsert -> signed session token.
async fn complete_sign_in(state: &AppState, code: &str) -> Result<String, AppError> {
    let grant = state
        .google
        .exchange_code(code)
        .await
        .map_err(|e| AppError::InternalError(format!("Token exchange failed: {e}")))?;

    let profile = state
        .google
        .fetch_profile(&grant.access_token)
        .await
        .map_err(|e| AppError::InternalError(format!("Userinfo fetch failed: {e}")))?;

    if !state.config.admin_emails.iter().any(|e| e == &profile.email) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Access denied".into(),
        )));
    }

    let admin = AdminUserRepo::upsert(
        &state.pool,
        &UpsertAdminUser {
            email: profile.email,
            display_name: profile.name,
            picture_url: profile.picture,
        },
    )
    .await?;

    generate_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token signing failed: {e}")))
}

/// GET /api/v1/auth/me
///
/// Returns the full admin row for the verified session.
pub async fn me(
    State(state): State<AppState>,
    admin: AdminIdentity,
) -> AppResult<Json<AdminUser>> {
    let user = AdminUserRepo::find_by_id(&state.pool, admin.admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdminUser",
            key: admin.email,
        }))?;
    Ok(Json(user))
}

/// POST /api/v1/auth/logout
///
/// Clears the session cookie. Tokens are stateless and cannot be revoked
/// server-side before they expire.
pub async fn logout(_admin: AdminIdentity) -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(serde_json::json!({ "success": true })),
    )
}

fn login_url(state: &AppState) -> String {
    format!("{}/auth/login", state.config.frontend_url)
}

fn dashboard_url(state: &AppState) -> String {
    format!("{}/dashboard", state.config.frontend_url)
}
