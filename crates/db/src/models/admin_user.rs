//! Admin user model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The privileged site owner row from the `admin_users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
    /// Preferred display order of project ids. Ids missing from this list
    /// sort after the listed ones.
    pub order_project_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or refreshing the admin row at OAuth sign-in.
#[derive(Debug, Clone)]
pub struct UpsertAdminUser {
    pub email: String,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
}
