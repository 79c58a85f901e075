//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated admin user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireEditor`] -- Requires `editor` or `admin` role.
//! - [`context::Client`] -- Language and cookie consent of the site visitor.

pub mod auth;
pub mod context;
pub mod rbac;
