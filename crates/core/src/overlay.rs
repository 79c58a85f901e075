//! Field-wise fallback merge used by every localized shape.
//!
//! A value is "present" when it carries non-whitespace text (strings) or at
//! least one non-blank element (lists). Missing and blank are the same thing
//! as far as resolution is concerned.

/// A shape whose fields can fall back to another instance of itself.
pub trait Overlay: Clone {
    /// Merge `self` over `fallback`: every present field of `self` wins,
    /// every other field is taken from `fallback`.
    fn overlay(&self, fallback: &Self) -> Self;
}

/// `true` when the string holds any non-whitespace character.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// `true` when the list holds at least one non-blank element.
pub fn is_present_list(value: &Option<Vec<String>>) -> bool {
    value
        .as_deref()
        .is_some_and(|items| items.iter().any(|s| !s.trim().is_empty()))
}

/// Pick `primary` when present, else `fallback`.
pub fn text(primary: &Option<String>, fallback: &Option<String>) -> Option<String> {
    if is_present(primary) {
        primary.clone()
    } else {
        fallback.clone()
    }
}

/// All-or-nothing list fallback: a present list replaces the fallback whole.
pub fn list(primary: &Option<Vec<String>>, fallback: &Option<Vec<String>>) -> Option<Vec<String>> {
    if is_present_list(primary) {
        primary.clone()
    } else {
        fallback.clone()
    }
}

/// Resolve a shape through the three tiers: translation, base, default.
///
/// Without a base record the default is returned verbatim, translation or
/// not. With a base record, each field takes the first present value of
/// translation, base, default.
pub fn resolve<T: Overlay>(default: &T, base: Option<&T>, translation: Option<&T>) -> T {
    let Some(base) = base else {
        return default.clone();
    };
    let merged = base.overlay(default);
    match translation {
        Some(t) => t.overlay(&merged),
        None => merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Pair {
        title: Option<String>,
        tags: Option<Vec<String>>,
    }

    impl Overlay for Pair {
        fn overlay(&self, fallback: &Self) -> Self {
            Self {
                title: text(&self.title, &fallback.title),
                tags: list(&self.tags, &fallback.tags),
            }
        }
    }

    fn pair(title: Option<&str>, tags: Option<&[&str]>) -> Pair {
        Pair {
            title: title.map(str::to_string),
            tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn blank_strings_are_absent() {
        assert!(!is_present(&Some("  \n".into())));
        assert!(!is_present(&None));
        assert!(is_present(&Some(" a ".into())));
    }

    #[test]
    fn lists_of_blanks_are_absent() {
        assert!(!is_present_list(&Some(vec![])));
        assert!(!is_present_list(&Some(vec!["".into(), " ".into()])));
        assert!(is_present_list(&Some(vec!["".into(), "x".into()])));
    }

    #[test]
    fn no_base_returns_default_verbatim() {
        let default = pair(Some("D"), Some(&["d"]));
        let translation = pair(Some("T"), None);
        assert_eq!(resolve(&default, None, Some(&translation)), default);
    }

    #[test]
    fn translation_beats_base_beats_default() {
        let default = pair(Some("D"), Some(&["d"]));
        let base = pair(None, Some(&["b1", "b2"]));
        let translation = pair(Some("T"), Some(&[]));
        let out = resolve(&default, Some(&base), Some(&translation));
        assert_eq!(out, pair(Some("T"), Some(&["b1", "b2"])));
    }

    #[test]
    fn list_override_is_whole() {
        let default = Pair::default();
        let base = pair(None, Some(&["a", "b", "c"]));
        let translation = pair(None, Some(&["x"]));
        let out = resolve(&default, Some(&base), Some(&translation));
        assert_eq!(out.tags, Some(vec!["x".to_string()]));
    }
}
