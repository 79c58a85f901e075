//! Site branding colors.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, FieldErrors};
use crate::overlay::{text, Overlay};

/// `#rgb` or `#rrggbb`.
const HEX_COLOR_PATTERN: &str = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid regex"));

/// `site_settings` key the colors are stored under.
pub const BRANDING_SETTING_KEY: &str = "branding";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

impl Overlay for BrandColors {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            primary: text(&self.primary, &fallback.primary),
            secondary: text(&self.secondary, &fallback.secondary),
            accent: text(&self.accent, &fallback.accent),
            background: text(&self.background, &fallback.background),
            text: text(&self.text, &fallback.text),
        }
    }
}

impl BrandColors {
    pub fn builtin() -> Self {
        Self {
            primary: Some("#e30613".into()),
            secondary: Some("#1a1a1a".into()),
            accent: Some("#ffcc00".into()),
            background: Some("#ffffff".into()),
            text: Some("#222222".into()),
        }
    }

    /// Stored colors with each blank field filled from [`BrandColors::builtin`].
    pub fn with_defaults(stored: Option<&Self>) -> Self {
        let builtin = Self::builtin();
        match stored {
            Some(colors) => colors.overlay(&builtin),
            None => builtin,
        }
    }

    /// Every provided color must be a hex color. Absent or blank fields are
    /// allowed and fall back to the built-in value on read.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
        ];
        let mut errors = FieldErrors::new();
        for (name, value) in fields {
            if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                if !is_hex_color(v) {
                    errors
                        .entry(name.to_string())
                        .or_default()
                        .push(format!("'{v}' is not a hex color like #aabbcc"));
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(errors))
        }
    }
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}
