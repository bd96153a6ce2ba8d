//! Repository for the `projects` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, detail, client, category, year, \
                       scope_of_work, image_url, image_file_id, created_at, updated_at";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with its server-derived slug, returning the
    /// created row. An absent `detail` is stored as the empty string.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        slug: &str,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, slug, description, detail, client, category, year, \
                                   scope_of_work, image_url, image_file_id)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.detail)
            .bind(&input.client)
            .bind(&input.category)
            .bind(&input.year)
            .bind(&input.scope_of_work)
            .bind(&input.image_url)
            .bind(&input.image_file_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its slug (exact match). Used by the public
    /// detail page.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find any project matching the given title or slug. Backs the
    /// duplicate pre-check at creation.
    pub async fn find_conflicting(
        pool: &PgPool,
        title: &str,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE title = $1 OR slug = $2 LIMIT 1");
        sqlx::query_as::<_, Project>(&query)
            .bind(title)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first. Display ordering
    /// against the owner's preference is applied by the caller.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Title and description always overwrite; `detail`
    /// resets to the empty string when absent; the remaining optional
    /// fields keep their stored values when absent. The slug is never
    /// touched.
    ///
    /// Returns `None` when no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                description = $3,
                detail = COALESCE($4, ''),
                client = COALESCE($5, client),
                category = COALESCE($6, category),
                year = COALESCE($7, year),
                scope_of_work = COALESCE($8, scope_of_work),
                image_url = COALESCE($9, image_url),
                image_file_id = COALESCE($10, image_file_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.detail)
            .bind(&input.client)
            .bind(&input.category)
            .bind(&input.year)
            .bind(&input.scope_of_work)
            .bind(&input.image_url)
            .bind(&input.image_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
