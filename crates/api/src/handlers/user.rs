//! Handlers for the admin user's display-order preference.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use atelier_db::repositories::AdminUserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminIdentity;
use crate::state::AppState;

/// Request body for `PUT /api/v1/user/order`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub order_project_ids: Vec<DbId>,
}

/// PUT /api/v1/user/order
///
/// Replaces the authenticated owner's project display order with the
/// sequence produced by a dashboard drag-reorder. The full sequence is
/// replaced in one statement; there is no merge.
pub async fn update_order(
    State(state): State<AppState>,
    admin: AdminIdentity,
    Json(input): Json<UpdateOrderRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let updated =
        AdminUserRepo::set_project_order(&state.pool, admin.admin_id, &input.order_project_ids)
            .await?;

    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AdminUser",
            key: admin.email,
        }));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
