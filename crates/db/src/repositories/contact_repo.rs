//! Repository for the `contacts` table.
//!
//! Besides plain CRUD this exposes the four queries the rate limiter
//! needs: trailing-window counts and most-recent timestamps, each keyed
//! by IP or by email.

use atelier_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::contact::{ContactMessage, CreateContactMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, message, ip, created_at";

/// Provides persistence and rate-limit lookups for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert an admitted message with a server-assigned `created_at`,
    /// returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message, ip)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .bind(&input.ip)
            .fetch_one(pool)
            .await
    }

    /// List all messages, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Messages from `ip` created at or after `cutoff`.
    pub async fn count_by_ip_since(
        pool: &PgPool,
        ip: &str,
        cutoff: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE ip = $1 AND created_at >= $2")
            .bind(ip)
            .bind(cutoff)
            .fetch_one(pool)
            .await
    }

    /// Messages from `email` created at or after `cutoff`.
    pub async fn count_by_email_since(
        pool: &PgPool,
        email: &str,
        cutoff: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE email = $1 AND created_at >= $2")
            .bind(email)
            .bind(cutoff)
            .fetch_one(pool)
            .await
    }

    /// Timestamp of the most recent message from `ip`, any age.
    pub async fn last_created_by_ip(
        pool: &PgPool,
        ip: &str,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT created_at FROM contacts WHERE ip = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(ip)
        .fetch_optional(pool)
        .await
    }

    /// Timestamp of the most recent message from `email`, any age.
    pub async fn last_created_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT created_at FROM contacts WHERE email = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }
}
