//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin_user;
pub mod analytics_event;
pub mod contact_request;
pub mod navigation;
pub mod page_content;
pub mod service;
pub mod site_setting;
pub mod ui_translation;
pub mod vehicle;
