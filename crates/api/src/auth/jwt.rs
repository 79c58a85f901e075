//! Admin panel access tokens.
//!
//! HS256 JWTs issued by `POST /auth/login` and checked by the admin
//! extractors. Every token names this service as issuer; tokens minted for
//! anything else with the same secret are refused. There is no refresh
//! flow, so an editor logs in again once a token runs out.

use chrono::Utc;
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tuneshop_core::types::DbId;
use uuid::Uuid;

/// `iss` claim of every token this server issues.
pub const TOKEN_ISSUER: &str = "tuneshop-admin";

/// Editing sessions are long, so tokens outlive a typical API token.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 120;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin user id.
    pub sub: DbId,
    /// Role name as stored on the account; decoded by the auth extractor.
    pub role: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default `120`).
    ///
    /// # Panics
    ///
    /// Panics on a missing or empty secret or a non-numeric expiry.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(v) => v
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be a whole number of minutes"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Token lifetime as reported to the client in `expires_in`.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

/// Sign a token for `user_id` carrying `role`.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    let issued_at = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        iss: TOKEN_ISSUER.to_string(),
        iat: issued_at,
        exp: issued_at + config.expires_in_secs(),
        jti: Uuid::new_v4().to_string(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature, issuer and expiry, then return the claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, JwtError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &JwtConfig::validation(),
    )
    .map(|data| data.claims)
}
