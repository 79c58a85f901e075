pub mod analytics;
pub mod auth;
pub mod branding;
pub mod contact;
pub mod content;
pub mod health;
pub mod navigation;
pub mod services;
pub mod translations;
pub mod vehicles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                       login (public)
/// /auth/me                                          current admin (requires auth)
///
/// /navigation                                       localized header links
/// /content                                          all sections, localized
/// /content/{section}                                one section, localized
/// /services                                         localized service cards
/// /vehicles/...                                     power-checker cascade
/// /translations/{lang}                              UI dictionary with fallback
/// /branding                                         effective brand colors
/// /contact                                          contact form (POST)
/// /analytics/events                                 consent-gated sink (POST)
///
/// /admin/navigation                                 CRUD + PUT /reorder (editor)
/// /admin/content                                    CRUD (editor)
/// /admin/services                                   CRUD + PUT /reorder (editor)
/// /admin/translations                               list, upsert, delete (editor)
/// /admin/contact-requests                           inbox (editor)
/// /admin/vehicles                                   CRUD (admin)
/// /admin/branding                                   get, replace (admin)
/// /admin/analytics/summary                          event counts (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .nest("/navigation", navigation::admin_router())
        .nest("/content", content::admin_router())
        .nest("/services", services::admin_router())
        .nest("/translations", translations::admin_router())
        .nest("/contact-requests", contact::admin_router())
        .nest("/vehicles", vehicles::admin_router())
        .nest("/branding", branding::admin_router())
        .nest("/analytics", analytics::admin_router());

    Router::new()
        .nest("/auth", auth::router())
        .nest("/navigation", navigation::router())
        .nest("/content", content::router())
        .nest("/services", services::router())
        .nest("/vehicles", vehicles::router())
        .nest("/translations", translations::router())
        .nest("/branding", branding::router())
        .nest("/contact", contact::router())
        .nest("/analytics", analytics::router())
        .nest("/admin", admin)
}
