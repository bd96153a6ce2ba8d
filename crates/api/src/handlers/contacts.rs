//! Handlers for the `/contacts` resource.
//!
//! Submission is public and gated by the rate-limit policy in
//! `atelier_core::contact`; listing and deletion are dashboard
//! operations.

use atelier_core::contact::{self, ContactSubmission, RateLimitSnapshot};
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{Duration, Utc};

use atelier_db::models::contact::{ContactMessage, CreateContactMessage};
use atelier_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// POST /api/v1/contacts
///
/// Validates the fields, assembles the sender's rate-limit snapshot from
/// existing messages, and persists the message on a pass. An
/// unresolvable client IP is a server-side failure (500), not a client
/// error.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<ContactSubmission>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    let Some(ip) = client_ip(&headers) else {
        return Err(AppError::ServerError("Could not determine IP address".into()));
    };

    contact::validate_submission(&input)?;

    let now = Utc::now();
    let cutoff = now - Duration::milliseconds(contact::DAILY_WINDOW_MS);

    let snapshot = RateLimitSnapshot {
        ip_daily_count: ContactRepo::count_by_ip_since(&state.pool, &ip, cutoff).await?,
        email_daily_count: ContactRepo::count_by_email_since(&state.pool, &input.email, cutoff)
            .await?,
        last_from_ip: ContactRepo::last_created_by_ip(&state.pool, &ip).await?,
        last_from_email: ContactRepo::last_created_by_email(&state.pool, &input.email).await?,
    };
    contact::evaluate(now, &snapshot)?;

    // The policy checks and this insert are separate statements; two
    // concurrent submissions from the same sender can both pass.
    let message = ContactRepo::create(
        &state.pool,
        &CreateContactMessage {
            name: input.name,
            email: input.email,
            message: input.message,
            ip,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/contacts
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminIdentity,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            key: id.to_string(),
        }));
    }
    Ok(Json(serde_json::json!({ "message": "Message deleted successfully" })))
}

/// Resolve the client IP from proxy headers: the first entry of
/// `x-forwarded-for`, falling back to `x-real-ip`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}
