//! Bundled UI strings, keyed by locale code and then by message key.
//!
//! Lookups fall back from the requested locale to [`FALLBACK_LOCALE`] and
//! finally to the key itself, so a lookup never fails.

use std::collections::BTreeMap;

pub const FALLBACK_LOCALE: &str = "en";

pub const TOP_READ: &str = "top-read";

const BUNDLED: &[(&str, &[(&str, &str)])] = &[
    ("en", &[(TOP_READ, "Top read")]),
    ("fr", &[(TOP_READ, "Les plus lus")]),
];

#[derive(Debug, Clone)]
pub struct StringTable {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self {
            locales: BTreeMap::new(),
        }
    }

    pub fn bundled() -> Self {
        let mut table = Self::new();
        for (locale, entries) in BUNDLED {
            for (key, value) in entries.iter() {
                table.insert(locale, key, value);
            }
        }
        table
    }

    pub fn insert(&mut self, locale: &str, key: &str, value: &str) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn get<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        [locale, FALLBACK_LOCALE]
            .iter()
            .filter_map(|l| self.locales.get(*l))
            .find_map(|strings| strings.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::bundled()
    }
}
