//! Repository for the `admin_users` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin_user::{AdminUser, UpsertAdminUser};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, display_name, picture_url, order_project_ids, created_at, updated_at";

/// Provides lookups and order mutations for the site owner record.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Find the admin row by email (case-sensitive).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE email = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the admin row by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE id = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the admin row on first sign-in, refreshing the profile
    /// fields on later sign-ins. The stored display order survives the
    /// upsert untouched.
    pub async fn upsert(pool: &PgPool, input: &UpsertAdminUser) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (email, display_name, picture_url)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET
                 display_name = COALESCE(EXCLUDED.display_name, admin_users.display_name),
                 picture_url = COALESCE(EXCLUDED.picture_url, admin_users.picture_url),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.picture_url)
            .fetch_one(pool)
            .await
    }

    /// Push a newly created project to the front of the owner's display
    /// order. A single atomic UPDATE, so concurrent creates cannot lose
    /// each other's prepends. Returns `true` when the admin row exists.
    pub async fn prepend_project_id(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_users
             SET order_project_ids = array_prepend($2, order_project_ids), updated_at = NOW()
             WHERE id = $1",
        )
        .bind(admin_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the full display order after a dashboard drag-reorder.
    /// Returns `true` when the admin row exists.
    pub async fn set_project_order(
        pool: &PgPool,
        admin_id: DbId,
        order: &[DbId],
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_users SET order_project_ids = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(admin_id)
        .bind(order)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
