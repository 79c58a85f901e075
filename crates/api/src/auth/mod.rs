//! Authentication primitives for the admin panel.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;
