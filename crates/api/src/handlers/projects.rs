//! Handlers for the `/projects` resource.
//!
//! Create, update, and delete are dashboard operations gated by
//! [`AdminIdentity`]; the ordered list and the slug detail endpoint feed
//! the public site.

use atelier_core::error::CoreError;
use atelier_core::ordering::map_order;
use atelier_core::project::validate_payload;
use atelier_core::slug::slugify;
use atelier_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_db::models::project::{CreateProject, Project, UpdateProject};
use atelier_db::repositories::{AdminUserRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Validates the payload, derives the slug from the title, rejects
/// duplicate titles or slugs, inserts the row, and pushes the new id to
/// the front of the owner's display order.
pub async fn create(
    State(state): State<AppState>,
    admin: AdminIdentity,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_payload(&input.title, &input.description)?;

    let slug = slugify(&input.title);

    // Pre-check for the original 409 message. The check and the insert
    // are separate statements; a concurrent duplicate slips past this and
    // lands on the uq_projects_* constraints instead, still surfacing as
    // a 409.
    if ProjectRepo::find_conflicting(&state.pool, &input.title, &slug)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A project with this title already exists".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input, &slug).await?;

    AdminUserRepo::prepend_project_id(&state.pool, admin.admin_id, project.id).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Returns every project in the owner's preferred display order.
/// Projects missing from the order list come last; when no owner row
/// exists yet the raw list is returned as-is.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;

    let Some(owner_email) = state.config.admin_emails.first() else {
        return Ok(Json(projects));
    };
    let Some(owner) = AdminUserRepo::find_by_email(&state.pool, owner_email).await? else {
        return Ok(Json(projects));
    };

    let ordered = map_order(&projects, &owner.order_project_ids, |p| p.id);
    Ok(Json(ordered))
}

/// GET /api/v1/projects/{slug}
///
/// Public detail lookup, addressed by slug rather than id.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            key: slug,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Full re-validation on every update. The slug is never regenerated, so
/// the public detail URL stays stable even when the title changes.
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_payload(&input.title, &input.description)?;

    if ProjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            key: id.to_string(),
        }));
    }

    // The row matched a moment ago; a vanishing write here is a storage
    // failure, not a 404.
    let updated = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::ServerError("Failed to update document".into()))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/projects/{id}
///
/// Looks the record up first so the remote hero image can be deleted
/// before the row. The remote delete is best-effort: a failure is logged
/// and the local delete still proceeds.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            key: id.to_string(),
        }))?;

    if let Some(file_id) = &project.image_file_id {
        if let Err(err) = state.assets.delete(file_id).await {
            tracing::warn!(
                project_id = id,
                error = %err,
                "Remote image delete failed; deleting the record anyway"
            );
        }
    }

    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            key: id.to_string(),
        }));
    }

    Ok(Json(serde_json::json!({ "message": "Project deleted successfully" })))
}
