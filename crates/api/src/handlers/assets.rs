//! Handlers for the dashboard image library.

use atelier_assets::{RemoteFile, UploadedAsset};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// GET /api/v1/assets
///
/// Lists every file on the CDN for the rich editor's image picker.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminIdentity,
) -> AppResult<Json<Vec<RemoteFile>>> {
    let files = state
        .assets
        .list_all()
        .await
        .map_err(|e| AppError::InternalError(format!("Asset listing failed: {e}")))?;
    Ok(Json(files))
}

/// POST /api/v1/assets
///
/// Accepts a single multipart `file` field and stores it on the CDN
/// under a fresh uuid name, returning the public URL and delete handle.
pub async fn upload(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadedAsset>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?;

        let file_name = Uuid::new_v4().to_string();
        let asset = state
            .assets
            .upload(&file_name, bytes.to_vec(), &content_type)
            .await
            .map_err(|e| AppError::InternalError(format!("Upload failed: {e}")))?;

        return Ok((StatusCode::CREATED, Json(asset)));
    }

    Err(AppError::BadRequest("Missing file field".into()))
}
