use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde_json::Value;
use thiserror::Error;

use crate::config;
use crate::state::locale::Locale;

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const ES_BUNDLE: &str = include_str!("../locales/es.json");

#[derive(Error, Debug)]
#[error("translation bundle for {locale} is not valid JSON")]
pub struct BundleError {
    pub locale: Locale,
    #[source]
    pub source: serde_json::Error,
}

/// Per-locale string bundles addressed by dotted keys such as
/// `faq.questions.q1.question`.
#[derive(Debug, Default)]
pub struct Translations {
    bundles: HashMap<Locale, Value>,
}

fn parse_bundle(locale: Locale, source: &str) -> Result<Value, BundleError> {
    serde_json::from_str(source).map_err(|source| BundleError { locale, source })
}

impl Translations {
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, BundleError> {
        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            bundles.insert(*locale, parse_bundle(*locale, source)?);
        }
        Ok(Self { bundles })
    }

    /// The bundles compiled into the binary. A bundle that fails to parse is
    /// skipped, and its lookups fall back like any other miss.
    pub fn bundled() -> Self {
        let mut translations = Self::default();
        for (locale, source) in [(Locale::En, EN_BUNDLE), (Locale::Es, ES_BUNDLE)] {
            match parse_bundle(locale, source) {
                Ok(value) => {
                    translations.bundles.insert(locale, value);
                }
                Err(e) => warn!("{}", e),
            }
        }
        translations
    }

    pub fn get(&self, key: &str, locale: Locale) -> Option<&str> {
        key.split('.')
            .try_fold(self.bundles.get(&locale)?, |node, part| node.get(part))?
            .as_str()
    }

    /// Current locale first, then the default locale, then the key itself.
    pub fn lookup(&self, key: &str, locale: Locale) -> String {
        if let Some(text) = self.get(key, locale) {
            return text.to_string();
        }
        if let Some(text) = self.get(key, config::DEFAULT_LOCALE) {
            warn!("missing {} translation for {}", locale, key);
            return text.to_string();
        }
        warn!("unknown translation key {}", key);
        key.to_string()
    }

    /// Every dotted key with a string value in `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> Vec<String> {
        fn walk(prefix: &str, node: &Value, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (name, child) in map {
                        let path = if prefix.is_empty() {
                            name.clone()
                        } else {
                            format!("{}.{}", prefix, name)
                        };
                        walk(&path, child, out);
                    }
                }
                Value::String(_) => out.push(prefix.to_string()),
                _ => {}
            }
        }

        let mut keys = Vec::new();
        if let Some(root) = self.bundles.get(&locale) {
            walk("", root, &mut keys);
        }
        keys.sort();
        keys
    }
}

/// What components see: the active locale and a way to resolve keys in it.
#[derive(Clone, Debug)]
pub struct I18n {
    pub locale: Locale,
    pub translations: Rc<Translations>,
}

impl I18n {
    pub fn t(&self, key: &str) -> String {
        self.translations.lookup(key, self.locale)
    }
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale && Rc::ptr_eq(&self.translations, &other.translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translations {
        Translations::from_sources(&[
            (Locale::En, r#"{"nav": {"faq": "FAQ", "features": "Features"}}"#),
            (Locale::Es, r#"{"nav": {"faq": "Preguntas"}}"#),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_in_current_locale() {
        let translations = sample();
        assert_eq!(translations.lookup("nav.faq", Locale::Es), "Preguntas");
        assert_eq!(translations.lookup("nav.faq", Locale::En), "FAQ");
    }

    #[test]
    fn test_missing_key_falls_back_to_default_then_key() {
        let translations = sample();
        assert_eq!(translations.lookup("nav.features", Locale::Es), "Features");
        assert_eq!(translations.lookup("nav.pricing", Locale::Es), "nav.pricing");
        assert_eq!(translations.lookup("nav", Locale::En), "nav");
    }

    #[test]
    fn test_invalid_bundle_reports_locale() {
        let err = Translations::from_sources(&[(Locale::Es, "{ nope")]).unwrap_err();
        assert_eq!(err.locale, Locale::Es);
    }

    #[test]
    fn test_parse_bundle_shared_by_both_constructors() {
        assert!(parse_bundle(Locale::En, EN_BUNDLE).is_ok());
        let err = parse_bundle(Locale::Es, "[1, 2").unwrap_err();
        assert_eq!(err.locale, Locale::Es);
        assert!(err.to_string().contains("es"));
    }

    #[test]
    fn test_bundled_locales_share_the_same_keys() {
        let translations = Translations::bundled();
        let en = translations.keys(Locale::En);
        assert!(!en.is_empty());
        assert_eq!(en, translations.keys(Locale::Es));
    }

    #[test]
    fn test_bundled_faq_has_six_entries() {
        let translations = Translations::bundled();
        for n in 1..=6 {
            let key = format!("faq.questions.q{}.question", n);
            assert!(translations.get(&key, Locale::En).is_some(), "{key}");
            assert!(translations.get(&key, Locale::Es).is_some(), "{key}");
        }
    }

    #[test]
    fn test_i18n_uses_its_locale() {
        let translations = Rc::new(sample());
        let i18n = I18n {
            locale: Locale::Es,
            translations: translations.clone(),
        };
        assert_eq!(i18n.t("nav.faq"), "Preguntas");
        assert_ne!(
            i18n,
            I18n {
                locale: Locale::En,
                translations
            }
        );
    }
}
