//! Service cards shown on the services page.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::content::ServiceText;
use tuneshop_core::navigation::Ordered;
use tuneshop_core::types::{DbId, Timestamp};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: Option<String>,
    pub features: Vec<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub translations: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ordered for Service {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl Service {
    /// Base-language text as an overlay shape.
    pub fn text(&self) -> ServiceText {
        ServiceText {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            price: self.price.clone(),
            features: Some(self.features.clone()),
        }
    }
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<serde_json::Value>,
}

/// DTO for partially updating a service.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub features: Option<Vec<String>>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<serde_json::Value>,
}
