//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_user_repo;
pub mod analytics_event_repo;
pub mod contact_request_repo;
pub mod navigation_repo;
pub mod ordering;
pub mod page_content_repo;
pub mod service_repo;
pub mod site_setting_repo;
pub mod ui_translation_repo;
pub mod vehicle_repo;

pub use admin_user_repo::AdminUserRepo;
pub use analytics_event_repo::AnalyticsEventRepo;
pub use contact_request_repo::ContactRequestRepo;
pub use navigation_repo::NavigationRepo;
pub use ordering::ReorderError;
pub use page_content_repo::PageContentRepo;
pub use service_repo::ServiceRepo;
pub use site_setting_repo::SiteSettingRepo;
pub use ui_translation_repo::UiTranslationRepo;
pub use vehicle_repo::VehicleRepo;
