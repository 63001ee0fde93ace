use std::collections::HashMap;

use tracing::warn;

use crate::i18n::{StringTable, FALLBACK_LOCALE};

pub const LANG_KEY: &str = "lang";

/// Parse a query-string-style argument (`lang=fr&x=1`, optionally prefixed
/// with `?`) into a map. Later duplicates win.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

pub struct LocaleResolver<'a> {
    strings: &'a StringTable,
}

impl<'a> LocaleResolver<'a> {
    pub fn new(strings: &'a StringTable) -> Self {
        Self { strings }
    }

    /// Resolve the locale from the preset widget parameter and the query map.
    /// A query `lang` wins over the preset, even when empty; an empty preset
    /// counts as unset. Unsupported codes fall back to English with a
    /// warning. Never fails.
    pub fn resolve(
        &self,
        widget_parameter: Option<&str>,
        query: &HashMap<String, String>,
    ) -> String {
        let requested = query
            .get(LANG_KEY)
            .map(String::as_str)
            .or(widget_parameter.filter(|raw| !raw.is_empty()));

        let Some(raw) = requested else {
            return FALLBACK_LOCALE.to_string();
        };

        let requested = raw.trim();
        if self.strings.supports(requested) {
            requested.to_string()
        } else {
            warn!(
                "Language not found: {:?}, defaulting to {}",
                requested, FALLBACK_LOCALE
            );
            FALLBACK_LOCALE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(param: Option<&str>, query: &str) -> String {
        let strings = StringTable::bundled();
        LocaleResolver::new(&strings).resolve(param, &parse_query(query))
    }

    #[test]
    fn test_defaults_to_english() {
        assert_eq!(resolve(None, ""), "en");
        assert_eq!(resolve(Some(""), ""), "en");
    }

    #[test]
    fn test_query_overrides_preset() {
        assert_eq!(resolve(Some("en"), "lang=fr"), "fr");
        assert_eq!(resolve(Some("fr"), "?other=1"), "fr");
    }

    #[test]
    fn test_empty_query_lang_is_unsupported() {
        // An empty lang still overrides the preset and then falls back
        assert_eq!(resolve(Some("fr"), "lang="), "en");
        assert_eq!(resolve(None, "lang=%20"), "en");
    }

    #[test]
    fn test_value_is_trimmed() {
        assert_eq!(resolve(Some(" fr "), ""), "fr");
        assert_eq!(resolve(None, "lang=%20fr%20"), "fr");
    }

    #[test]
    fn test_unsupported_falls_back() {
        assert_eq!(resolve(Some("xx"), ""), "en");
        assert_eq!(resolve(Some("fr"), "lang=xx"), "en");
    }

    #[test]
    fn test_parse_query_pairs() {
        let query = parse_query("lang=fr&size=small");

        assert_eq!(query.get("lang").map(String::as_str), Some("fr"));
        assert_eq!(query.get("size").map(String::as_str), Some("small"));
    }
}
