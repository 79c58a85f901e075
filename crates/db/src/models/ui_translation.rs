//! Interface string dictionary entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::types::{DbId, Timestamp};

/// A row from the `ui_translations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UiTranslation {
    pub id: DbId,
    pub language: String,
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for setting one key in one language.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUiTranslation {
    pub language: String,
    pub key: String,
    pub value: String,
}
