//! Content slots and multilingual content resolution.
//!
//! A content slot is a named, admin-editable region of the public site
//! (`hero`, `zbox`, `services`, or any other key). Each slot stores a base
//! JSON object plus a `translations` object keyed by language code whose
//! values are partial overrides of the base. Resolution overlays the
//! requested language over the base over the built-in default, see
//! [`crate::overlay::resolve`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::language::Language;
use crate::overlay::{list, resolve, text, Overlay};

// ---------------------------------------------------------------------------
// Slot kinds
// ---------------------------------------------------------------------------

/// Which shape a section's JSON follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Hero,
    Zbox,
    Services,
    Generic,
}

impl SlotKind {
    /// Map a section key to its slot kind. Unknown keys are generic.
    pub fn for_section(section: &str) -> Self {
        match section {
            "hero" => Self::Hero,
            "zbox" => Self::Zbox,
            "services" => Self::Services,
            _ => Self::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Zbox => "zbox",
            Self::Services => "services",
            Self::Generic => "generic",
        }
    }
}

// ---------------------------------------------------------------------------
// Slot shapes
// ---------------------------------------------------------------------------

/// Landing-page hero banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

/// Z-Box product block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZboxContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<String>,
    pub price_note: Option<String>,
    pub button_text: Option<String>,
}

/// Heading block above the services grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

/// Any other section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub button_text: Option<String>,
}

/// Localizable text of a single service card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceText {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub features: Option<Vec<String>>,
}

/// Localizable label of a navigation item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLabel {
    pub label: Option<String>,
}

impl Overlay for HeroContent {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            title: text(&self.title, &fallback.title),
            subtitle: text(&self.subtitle, &fallback.subtitle),
            description: text(&self.description, &fallback.description),
            button_text: text(&self.button_text, &fallback.button_text),
            button_link: text(&self.button_link, &fallback.button_link),
        }
    }
}

impl Overlay for ZboxContent {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            title: text(&self.title, &fallback.title),
            description: text(&self.description, &fallback.description),
            features: list(&self.features, &fallback.features),
            price: text(&self.price, &fallback.price),
            price_note: text(&self.price_note, &fallback.price_note),
            button_text: text(&self.button_text, &fallback.button_text),
        }
    }
}

impl Overlay for ServicesContent {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            title: text(&self.title, &fallback.title),
            subtitle: text(&self.subtitle, &fallback.subtitle),
            description: text(&self.description, &fallback.description),
        }
    }
}

impl Overlay for GenericContent {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            title: text(&self.title, &fallback.title),
            subtitle: text(&self.subtitle, &fallback.subtitle),
            description: text(&self.description, &fallback.description),
            features: list(&self.features, &fallback.features),
            button_text: text(&self.button_text, &fallback.button_text),
        }
    }
}

impl Overlay for ServiceText {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            title: text(&self.title, &fallback.title),
            description: text(&self.description, &fallback.description),
            price: text(&self.price, &fallback.price),
            features: list(&self.features, &fallback.features),
        }
    }
}

impl Overlay for NavLabel {
    fn overlay(&self, fallback: &Self) -> Self {
        Self {
            label: text(&self.label, &fallback.label),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in defaults
// ---------------------------------------------------------------------------

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn default_hero() -> HeroContent {
    HeroContent {
        title: s("Professional ECU <span>Chiptuning</span>"),
        subtitle: s("More power, more torque, lower fuel consumption"),
        description: s(
            "Dyno-verified software tuning for cars, trucks and tractors. \
             Every map is tailored to your engine.",
        ),
        button_text: s("Check your vehicle"),
        button_link: s("#power-checker"),
    }
}

fn default_zbox() -> ZboxContent {
    ZboxContent {
        title: s("Z-Box Performance Module"),
        description: s("Plug-and-play tuning box with a dedicated map for your engine."),
        features: Some(vec![
            "Up to 30% more power".to_string(),
            "Installation in 15 minutes".to_string(),
            "Removable without a trace".to_string(),
            "2 year warranty".to_string(),
        ]),
        price: s("from 299 EUR"),
        price_note: s("Installation included"),
        button_text: s("Order Z-Box"),
    }
}

fn default_services() -> ServicesContent {
    ServicesContent {
        title: s("Our Services"),
        subtitle: s("Everything your engine needs"),
        description: s("From Stage 1 remaps to DPF and EGR solutions."),
    }
}

// ---------------------------------------------------------------------------
// Slot union
// ---------------------------------------------------------------------------

/// A resolved content slot, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotContent {
    Hero(HeroContent),
    Zbox(ZboxContent),
    Services(ServicesContent),
    Generic(GenericContent),
}

impl SlotContent {
    /// Built-in default for a section key.
    pub fn default_for(section: &str) -> Self {
        match SlotKind::for_section(section) {
            SlotKind::Hero => Self::Hero(default_hero()),
            SlotKind::Zbox => Self::Zbox(default_zbox()),
            SlotKind::Services => Self::Services(default_services()),
            SlotKind::Generic => Self::Generic(GenericContent::default()),
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Self::Hero(_) => SlotKind::Hero,
            Self::Zbox(_) => SlotKind::Zbox,
            Self::Services(_) => SlotKind::Services,
            Self::Generic(_) => SlotKind::Generic,
        }
    }
}

/// The stored JSON of one content record, borrowed from a database row.
#[derive(Debug, Clone, Copy)]
pub struct RawContent<'a> {
    pub content: &'a Value,
    pub translations: &'a Value,
}

/// Parse a JSON object into a slot shape. `null` parses as an empty shape.
fn parse_shape<T: DeserializeOwned + Default>(value: &Value) -> Result<T, CoreError> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value.clone())
        .map_err(|e| CoreError::Validation(format!("Content does not match slot shape: {e}")))
}

/// Look up the translation object for a language, if any.
pub fn translation_for<'a>(translations: &'a Value, lang: Language) -> Option<&'a Value> {
    translations
        .as_object()
        .and_then(|map| map.get(lang.as_str()))
        .filter(|v| !v.is_null())
}

fn resolve_shape<T>(default: T, raw: Option<RawContent<'_>>, lang: Language) -> Result<T, CoreError>
where
    T: Overlay + DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    let base: T = parse_shape(raw.content)?;
    let translation: Option<T> = translation_for(raw.translations, lang)
        .map(parse_shape::<T>)
        .transpose()?;
    Ok(resolve(&default, Some(&base), translation.as_ref()))
}

/// Resolve the effective content of `section` for `lang`.
///
/// `raw` is `None` when no record exists for the section, in which case the
/// built-in default is returned verbatim. Errors only when the stored JSON
/// does not fit the slot shape; callers on public paths should log and fall
/// back to [`SlotContent::default_for`].
pub fn resolve_section(
    section: &str,
    raw: Option<RawContent<'_>>,
    lang: Language,
) -> Result<SlotContent, CoreError> {
    Ok(match SlotContent::default_for(section) {
        SlotContent::Hero(d) => SlotContent::Hero(resolve_shape(d, raw, lang)?),
        SlotContent::Zbox(d) => SlotContent::Zbox(resolve_shape(d, raw, lang)?),
        SlotContent::Services(d) => SlotContent::Services(resolve_shape(d, raw, lang)?),
        SlotContent::Generic(d) => SlotContent::Generic(resolve_shape(d, raw, lang)?),
    })
}

/// Resolve a localized shape stored as typed base plus a translations map.
///
/// Used for rows whose base fields live in columns (services, navigation)
/// rather than in a JSON blob. A translation that fails to parse is ignored.
pub fn resolve_localized<T>(base: &T, translations: &Value, lang: Language) -> T
where
    T: Overlay + DeserializeOwned + Default,
{
    let translation: Option<T> =
        translation_for(translations, lang).and_then(|v| parse_shape::<T>(v).ok());
    resolve(&T::default(), Some(base), translation.as_ref())
}

/// Check a record before it is written.
///
/// The base and every translation must fit the section's slot shape, and
/// every translation key must be a supported language code.
pub fn validate_record(section: &str, content: &Value, translations: &Value) -> Result<(), CoreError> {
    if section.trim().is_empty() {
        return Err(CoreError::Validation("Section key must not be empty".into()));
    }
    if !(content.is_object() || content.is_null()) {
        return Err(CoreError::Validation("Content must be a JSON object".into()));
    }
    let kind = SlotKind::for_section(section);
    check_shape(kind, content)?;
    validate_translation_map(translations, |value| check_shape(kind, value))
}

/// Validate a `translations` object: supported keys, values accepted by `check`.
pub fn validate_translation_map<F>(translations: &Value, check: F) -> Result<(), CoreError>
where
    F: Fn(&Value) -> Result<(), CoreError>,
{
    let map = match translations {
        Value::Null => return Ok(()),
        Value::Object(map) => map,
        _ => {
            return Err(CoreError::Validation(
                "Translations must be a JSON object keyed by language code".into(),
            ))
        }
    };
    for (code, value) in map {
        Language::from_code(code)?;
        check(value)?;
    }
    Ok(())
}

fn check_shape(kind: SlotKind, value: &Value) -> Result<(), CoreError> {
    match kind {
        SlotKind::Hero => parse_shape::<HeroContent>(value).map(|_| ()),
        SlotKind::Zbox => parse_shape::<ZboxContent>(value).map(|_| ()),
        SlotKind::Services => parse_shape::<ServicesContent>(value).map(|_| ()),
        SlotKind::Generic => parse_shape::<GenericContent>(value).map(|_| ()),
    }
}
