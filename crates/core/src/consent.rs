//! GDPR cookie consent flags and the consent gate.
//!
//! The browser keeps consent in local storage and sends it along with
//! requests that may trigger tracking. The server never persists it; it only
//! asks [`CookieConsent::permits`] before doing anything consent-bound.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Consent given more than this many days ago is treated as absent.
pub const CONSENT_MAX_AGE_DAYS: i64 = 365;

/// A consent category the visitor can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentCategory {
    Necessary,
    Analytics,
    Marketing,
    Functional,
}

/// The visitor's stored consent choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieConsent {
    /// Always `true`; a client-sent `false` is overridden on parse.
    #[serde(default = "always")]
    pub necessary: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(default)]
    pub functional: bool,
    /// When the choice was made. Consent without a timestamp never expires.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

fn always() -> bool {
    true
}

impl CookieConsent {
    /// Consent to everything, stamped `now`.
    pub fn accept_all(now: Timestamp) -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            functional: true,
            timestamp: Some(now),
        }
    }

    /// Only strictly necessary cookies, stamped `now`.
    pub fn necessary_only(now: Timestamp) -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            functional: false,
            timestamp: Some(now),
        }
    }

    /// Parse the JSON the client stores under `cookie-consent`.
    ///
    /// Malformed input is treated as "no consent given".
    pub fn parse(raw: &str) -> Option<Self> {
        let mut consent: Self = serde_json::from_str(raw.trim()).ok()?;
        consent.necessary = true;
        Some(consent)
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.timestamp
            .is_some_and(|ts| now - ts > Duration::days(CONSENT_MAX_AGE_DAYS))
    }

    /// Whether this consent allows `category` at `now`.
    pub fn permits(&self, category: ConsentCategory, now: Timestamp) -> bool {
        if category == ConsentCategory::Necessary {
            return true;
        }
        if self.is_expired(now) {
            return false;
        }
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Functional => self.functional,
        }
    }
}

/// The consent gate: absent consent only ever permits necessary cookies.
pub fn gate(consent: Option<&CookieConsent>, category: ConsentCategory) -> bool {
    match consent {
        Some(c) => c.permits(category, Utc::now()),
        None => category == ConsentCategory::Necessary,
    }
}
