// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{config, i18n::lookup, Locale};
use core::fmt;
use tracing::debug;

/// Carrier of the active display language.
///
/// This is an explicit context object the caller owns and threads through
/// rendering calls; there is no ambient global language state. Mutation
/// happens only through [set][LanguageStore::set] and
/// [toggle][LanguageStore::toggle], both driven by direct user interaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LanguageStore {
    current: Locale,
}

impl Default for LanguageStore {
    fn default() -> Self {
        LanguageStore::new(config().default_locale)
    }
}

impl LanguageStore {
    /// Construct a store w/ `locale` active.
    pub fn new(locale: Locale) -> Self {
        LanguageStore { current: locale }
    }

    /// Return the active [Locale].
    pub fn current(&self) -> Locale {
        self.current
    }

    /// Make `locale` the active one.
    pub fn set(&mut self, locale: Locale) {
        debug!("Language changed from {} to {}", self.current, locale);
        self.current = locale;
    }

    /// Flip the active language to the other supported one.
    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }

    /// Resolve a dot-delimited path (e.g. `"hero.title"`) against the
    /// active locale's catalog.
    ///
    /// When any path segment is absent the original key is returned
    /// unchanged --a missing translation degrades to its key on screen
    /// instead of failing the render.
    pub fn resolve(&self, key: &str) -> String {
        match lookup(self.current, key) {
            Some(x) => x.to_string(),
            None => {
                debug!("No '{}' translation for '{}'", self.current, key);
                key.to_string()
            }
        }
    }
}

impl fmt::Display for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LanguageStore{{ {} }}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_both_locales() {
        let mut store = LanguageStore::new(Locale::En);
        assert_eq!(store.resolve("projects.title"), "My Projects");
        store.set(Locale::Fa);
        assert_eq!(store.resolve("projects.title"), "پروژه‌های من");
    }

    #[test]
    fn test_resolve_falls_back_to_key() {
        let store = LanguageStore::new(Locale::En);
        assert_eq!(store.resolve("hero.no_such_key"), "hero.no_such_key");
        assert_eq!(store.resolve("totally.made.up"), "totally.made.up");
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut store = LanguageStore::new(Locale::Fa);
        store.toggle();
        assert_eq!(store.current(), Locale::En);
        store.toggle();
        assert_eq!(store.current(), Locale::Fa);
    }
}
