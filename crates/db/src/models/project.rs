//! Project entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A portfolio project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    /// URL identifier derived from the title at creation; never
    /// regenerated, so detail URLs stay stable across title edits.
    pub slug: String,
    pub description: String,
    /// Rich HTML fragment shown on the detail page. Empty when unset.
    pub detail: String,
    pub client: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub scope_of_work: Option<String>,
    /// Public URL of the hero image on the CDN.
    pub image_url: String,
    /// CDN handle needed to delete the remote asset.
    pub image_file_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. The slug is derived server-side from
/// the title.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub detail: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub scope_of_work: Option<String>,
    #[serde(default)]
    pub image_url: String,
    pub image_file_id: Option<String>,
}

/// DTO for updating an existing project. Title and description are
/// required again on every update; an absent `detail` resets to the empty
/// string, while the other optional fields keep their stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub detail: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub scope_of_work: Option<String>,
    pub image_url: Option<String>,
    pub image_file_id: Option<String>,
}
