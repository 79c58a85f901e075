//! Domain logic for the tuneshop site backend.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and
//! `api` crates call into these modules for lookups, content resolution,
//! ordering, consent checks and input validation.

pub mod branding;
pub mod consent;
pub mod contact;
pub mod content;
pub mod context;
pub mod error;
pub mod i18n;
pub mod language;
pub mod navigation;
pub mod overlay;
pub mod roles;
pub mod types;
pub mod vehicle;
