// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation catalog.
//!
//! All user-facing strings are embedded at compile time, one JSON document
//! per locale, parsed once on first use. The shape is nested: section name,
//! then leaf key, then the display string. Lookup walks the tree one dotted
//! path segment at a time and fails open --a missing path yields `None`
//! here and the raw key at the [store][crate::LanguageStore] level, never
//! a panic.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, sync::LazyLock};
use tracing::warn;

static EN: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("locales/en.json")).expect("Failed parsing 'en' catalog")
});
static FA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("locales/fa.json")).expect("Failed parsing 'fa' catalog")
});

/// A supported display language of the site.
///
/// The domain is a closed two-element set; toggling from one locale always
/// lands on the other.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English --the default.
    #[default]
    En,
    /// Farsi.
    Fa,
}

impl Locale {
    /// Short code identifying this display language.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    /// Parse a locale tag into a supported [Locale]. Case-insensitive.
    /// Return `None` for unsupported tags.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "fa" => Some(Locale::Fa),
            _ => None,
        }
    }

    /// Return the other supported locale.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Fa,
            Locale::Fa => Locale::En,
        }
    }

    fn catalog(&self) -> &'static Value {
        match self {
            Locale::En => &EN,
            Locale::Fa => &FA,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Walk the catalog of `locale` along the dot-delimited `path`, one segment
/// at a time. Return the configured string if every segment resolves and
/// the leaf is a string; `None` otherwise.
pub(crate) fn lookup(locale: Locale, path: &str) -> Option<&'static str> {
    let mut node = locale.catalog();
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    match node.as_str() {
        Some(x) => Some(x),
        None => {
            // a non-leaf path, e.g. "hero"...
            warn!("Path '{}' resolves to a non-string node", path);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_paths() {
        assert_eq!(lookup(Locale::En, "hero.subtitle"), Some("Full Stack Developer"));
        assert_eq!(lookup(Locale::Fa, "skills.frontend"), Some("فرانت‌اند"));
        assert_eq!(lookup(Locale::En, "projects.viewDetails"), Some("View Details"));
    }

    #[test]
    fn test_lookup_unknown_paths() {
        assert_eq!(lookup(Locale::En, "hero.bogus"), None);
        assert_eq!(lookup(Locale::Fa, "nope"), None);
        assert_eq!(lookup(Locale::En, ""), None);
        // a section is not a leaf...
        assert_eq!(lookup(Locale::En, "footer"), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code(" FA "), Some(Locale::Fa));
        assert_eq!(Locale::from_code("de"), None);
    }

    /// Every locale must define the same key structure. The compiler can't
    /// check this for us; this test does.
    #[test]
    fn test_catalogs_have_identical_shape() {
        fn paths(prefix: &str, node: &Value, acc: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (k, v) in map {
                        let p = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{}.{}", prefix, k)
                        };
                        paths(&p, v, acc);
                    }
                }
                _ => acc.push(prefix.to_string()),
            }
        }

        let mut en = vec![];
        paths("", Locale::En.catalog(), &mut en);
        let mut fa = vec![];
        paths("", Locale::Fa.catalog(), &mut fa);
        en.sort();
        fa.sort();
        assert_eq!(en, fa);
        assert!(!en.is_empty());

        // and every leaf must be a non-empty string in both locales...
        for p in en {
            assert!(!lookup(Locale::En, &p).unwrap().is_empty());
            assert!(!lookup(Locale::Fa, &p).unwrap().is_empty());
        }
    }
}
