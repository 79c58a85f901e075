//! UI string dictionaries.

use std::collections::BTreeMap;

use crate::error::CoreError;

/// Maximum length of a translation key.
pub const MAX_KEY_LENGTH: usize = 200;

pub type Dictionary = BTreeMap<String, String>;

/// Overlay `localized` on `fallback`, key by key.
///
/// Every fallback key is kept; a localized value replaces it only when it is
/// not blank. Keys that only exist in `localized` are kept as well.
pub fn merge_dictionary(fallback: Dictionary, localized: Dictionary) -> Dictionary {
    let mut merged = fallback;
    for (key, value) in localized {
        if !value.trim().is_empty() {
            merged.insert(key, value);
        } else {
            merged.entry(key).or_insert(value);
        }
    }
    merged
}

/// Keys are dotted lowercase identifiers, e.g. `contact.form.submit`.
pub fn validate_key(key: &str) -> Result<(), CoreError> {
    if key.is_empty() || key.len() > MAX_KEY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Translation key must be 1..={MAX_KEY_LENGTH} characters"
        )));
    }
    let valid = key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'));
    if !valid || key.starts_with('.') || key.ends_with('.') {
        return Err(CoreError::Validation(format!("Invalid translation key: '{key}'")));
    }
    Ok(())
}
