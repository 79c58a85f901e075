//! Per-request client context: preferred language and cookie consent.
//!
//! Both values live on the client. They are read fresh for every request and
//! passed explicitly to whatever needs them; nothing here is cached.

use crate::consent::{self, ConsentCategory, CookieConsent};
use crate::language::{Language, DEFAULT_LANGUAGE};

/// Name of the cookie / local-storage key holding the language code.
pub const LANGUAGE_COOKIE: &str = "preferred-language";

/// Name of the local-storage key holding consent JSON.
pub const CONSENT_KEY: &str = "cookie-consent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    pub language: Language,
    pub consent: Option<CookieConsent>,
}

impl Default for ClientContext {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            consent: None,
        }
    }
}

/// Raw inputs a language can come from, highest priority first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageSources<'a> {
    /// Explicit `?lang=` query parameter.
    pub query: Option<&'a str>,
    /// `preferred-language` cookie.
    pub cookie: Option<&'a str>,
    /// `Accept-Language` header.
    pub accept_language: Option<&'a str>,
}

impl ClientContext {
    pub fn new(language: Language, consent: Option<CookieConsent>) -> Self {
        Self { language, consent }
    }

    /// Build a context from raw request inputs.
    ///
    /// Unsupported or malformed values are skipped, never rejected.
    pub fn from_sources(sources: LanguageSources<'_>, consent_json: Option<&str>) -> Self {
        Self {
            language: resolve_language(sources),
            consent: consent_json.and_then(CookieConsent::parse),
        }
    }

    pub fn allows(&self, category: ConsentCategory) -> bool {
        consent::gate(self.consent.as_ref(), category)
    }
}

/// Pick the language: query, then cookie, then `Accept-Language`, then default.
pub fn resolve_language(sources: LanguageSources<'_>) -> Language {
    sources
        .query
        .and_then(Language::parse)
        .or_else(|| sources.cookie.and_then(Language::parse))
        .or_else(|| sources.accept_language.and_then(Language::from_accept_language))
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Find a cookie value in a raw `Cookie` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}
