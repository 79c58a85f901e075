//! Visitor context extractor.
//!
//! Language comes from `?lang=`, then the `preferred-language` cookie, then
//! `Accept-Language`. Consent JSON comes from the `x-cookie-consent` header,
//! falling back to a `cookie-consent` cookie. Malformed values are skipped.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::request::Parts;
use serde::Deserialize;
use tuneshop_core::context::{
    cookie_value, ClientContext, LanguageSources, CONSENT_KEY, LANGUAGE_COOKIE,
};

use crate::state::AppState;

/// Header the site sends its stored consent JSON in.
pub const CONSENT_HEADER: &str = "x-cookie-consent";

#[derive(Debug, Default, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

/// The visitor's [`ClientContext`] for this request. Never rejects.
#[derive(Debug, Clone)]
pub struct Client(pub ClientContext);

impl FromRequestParts<AppState> for Client {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let query = Query::<LangQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| q)
            .unwrap_or_default();

        let cookies = header_str(parts, COOKIE.as_str());

        let sources = LanguageSources {
            query: query.lang.as_deref(),
            cookie: cookies.and_then(|c| cookie_value(c, LANGUAGE_COOKIE)),
            accept_language: header_str(parts, ACCEPT_LANGUAGE.as_str()),
        };
        let consent = header_str(parts, CONSENT_HEADER)
            .or_else(|| cookies.and_then(|c| cookie_value(c, CONSENT_KEY)));

        Ok(Client(ClientContext::from_sources(sources, consent)))
    }
}
