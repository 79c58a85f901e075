//! Key/value site settings.

use serde::Serialize;
use sqlx::FromRow;
use tuneshop_core::types::Timestamp;

/// A row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}
