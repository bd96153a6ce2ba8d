//! Contact message model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An inbound contact-form message. Immutable once created; the
/// rate-limit policy reads only `created_at`, `ip`, and `email`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: String,
    pub created_at: Timestamp,
}

/// DTO for persisting an admitted submission. Built server-side from the
/// validated form body plus the resolved client IP.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: String,
}
