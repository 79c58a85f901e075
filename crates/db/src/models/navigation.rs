//! Header navigation items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::content::NavLabel;
use tuneshop_core::navigation::Ordered;
use tuneshop_core::types::{DbId, Timestamp};

/// A row from the `navigation_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NavigationItem {
    pub id: DbId,
    pub label: String,
    pub href: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub translations: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ordered for NavigationItem {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl NavigationItem {
    /// Base-language label as an overlay shape.
    pub fn label_text(&self) -> NavLabel {
        NavLabel {
            label: Some(self.label.clone()),
        }
    }
}

/// DTO for creating a navigation item.
///
/// When `sort_order` is omitted the item is appended after the current last.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNavigationItem {
    pub label: String,
    pub href: String,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<serde_json::Value>,
}

/// DTO for partially updating a navigation item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNavigationItem {
    pub label: Option<String>,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<serde_json::Value>,
}

/// Full list of ids in their new display order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<DbId>,
}
