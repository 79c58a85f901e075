//! Supported UI languages and language-code parsing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A language the site ships content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    Lv,
}

/// Language used when nothing else matches.
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::Lv];

    /// Return the wire-format code for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Lv => "lv",
        }
    }

    /// Leniently parse a language tag.
    ///
    /// Case-insensitive; region subtags are ignored (`ru-RU` -> `Ru`).
    /// Returns `None` for anything unsupported.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            "lv" => Some(Self::Lv),
            _ => None,
        }
    }

    /// Strictly parse a stored language code (exact lowercase match).
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == code)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unsupported language code: '{code}'. Must be one of: en, ru, lv"
                ))
            })
    }

    /// Pick the best supported language from an `Accept-Language` header.
    ///
    /// Entries are ranked by their `q` weight (default 1.0); ties keep
    /// header order. Entries with `q=0` are never selected.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut ranked: Vec<(f32, usize, &str)> = header
            .split(',')
            .enumerate()
            .filter_map(|(pos, part)| {
                let mut pieces = part.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let q = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((q, pos, tag))
            })
            .filter(|(q, _, _)| *q > 0.0)
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        ranked.into_iter().find_map(|(_, _, tag)| Self::parse(tag))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_region() {
        assert_eq!(Language::parse("RU"), Some(Language::Ru));
        assert_eq!(Language::parse("lv-LV"), Some(Language::Lv));
        assert_eq!(Language::parse("en_GB"), Some(Language::En));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn from_code_is_strict() {
        assert_eq!(Language::from_code("ru").unwrap(), Language::Ru);
        assert!(Language::from_code("RU").is_err());
        assert!(Language::from_code("fr").is_err());
    }

    #[test]
    fn accept_language_respects_weights() {
        let header = "de-DE,de;q=0.9,ru;q=0.5,en;q=0.8";
        assert_eq!(Language::from_accept_language(header), Some(Language::En));
    }

    #[test]
    fn accept_language_skips_zero_weight() {
        assert_eq!(
            Language::from_accept_language("ru;q=0, lv"),
            Some(Language::Lv)
        );
    }

    #[test]
    fn accept_language_without_supported_tags() {
        assert_eq!(Language::from_accept_language("fr, de;q=0.4"), None);
        assert_eq!(Language::from_accept_language(""), None);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Lv).unwrap();
        assert_eq!(json, "\"lv\"");
        let parsed: Language = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(parsed, Language::Ru);
    }
}
