//! Editable page content records, one per site section.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::content::RawContent;
use tuneshop_core::types::{DbId, Timestamp};

/// A row from the `page_content` table.
///
/// `content` holds the base-language slot fields; `translations` maps a
/// language code to a partial object of the same shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageContent {
    pub id: DbId,
    pub section: String,
    pub content: serde_json::Value,
    pub translations: serde_json::Value,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PageContent {
    pub fn raw(&self) -> RawContent<'_> {
        RawContent {
            content: &self.content,
            translations: &self.translations,
        }
    }
}

/// DTO for creating a content record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageContent {
    pub section: String,
    pub content: serde_json::Value,
    #[serde(default = "empty_object")]
    pub translations: serde_json::Value,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a content record. The section key is fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePageContent {
    pub content: Option<serde_json::Value>,
    pub translations: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}
