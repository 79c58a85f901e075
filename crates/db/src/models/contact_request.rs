//! Stored contact form submissions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::types::{DbId, Timestamp};

/// A row from the `contact_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactRequest {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub vehicle: Option<String>,
    pub language: String,
    pub is_handled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO, built from a validated and normalized contact form.
#[derive(Debug, Clone)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub vehicle: Option<String>,
    pub language: String,
}

/// Admin-side update: only the handled flag changes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactRequest {
    pub is_handled: bool,
}

/// Query parameters for the admin inbox.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequestFilter {
    pub is_handled: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
