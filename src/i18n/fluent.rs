// SPDX-License-Identifier: MPL-2.0
//! The localization context: catalog plus the active language.

use super::catalog::Catalog;
use super::language::Language;
use fluent_bundle::FluentArgs;

/// Resolves catalog keys in the currently active language.
///
/// Unknown keys resolve to themselves so a missing translation shows up on the
/// page as its raw key instead of breaking the layout.
#[derive(Debug)]
pub struct I18n {
    catalog: Catalog,
    language: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Catalog::embedded(), None)
    }
}

impl I18n {
    /// Creates a context whose active language comes from `stored`, or the
    /// default language when `stored` is absent or unsupported.
    pub fn new(catalog: Catalog, stored: Option<&str>) -> Self {
        Self {
            catalog,
            language: Language::resolve(stored),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tr(&self, key: &str) -> String {
        self.catalog
            .lookup(self.language, key, None)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.catalog
            .lookup(self.language, key, Some(&fluent_args))
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_key_resolves_to_its_text() {
        let mut i18n = I18n::default();
        for language in Language::ALL {
            i18n.set_language(language);
            let keys: Vec<String> = i18n.catalog().keys(language).map(str::to_string).collect();
            assert!(!keys.is_empty());
            for key in keys {
                let text = i18n.tr(&key);
                assert_ne!(text, key, "{language}: {key} fell back to its key");
                assert_eq!(Some(text), i18n.catalog().lookup(language, &key, None));
            }
        }
    }

    #[test]
    fn unknown_key_returns_key_for_any_language() {
        let mut i18n = I18n::default();
        for language in Language::ALL {
            i18n.set_language(language);
            assert_eq!(i18n.tr("definitely.not.a.key"), "definitely.not.a.key");
        }
    }

    #[test]
    fn page_keys_and_message_ids_resolve_alike() {
        let i18n = I18n::new(Catalog::embedded(), Some("en"));
        assert_eq!(i18n.tr("app.title"), "StockPro AI");
        assert_eq!(i18n.tr("app-title"), "StockPro AI");
        assert_eq!(
            i18n.tr("analysis.inputPlaceholder"),
            "Enter stock ticker (example: BBCA.JK)"
        );
        assert_eq!(i18n.tr("analysis.outputPlaceholder"), "analysis.outputPlaceholder");
    }

    #[test]
    fn stored_language_selects_active_language() {
        let i18n = I18n::new(Catalog::embedded(), Some("en"));
        assert_eq!(i18n.language(), Language::English);
        assert_eq!(i18n.tr("nav.language"), "Language");
    }

    #[test]
    fn missing_preference_defaults_to_indonesian() {
        let i18n = I18n::new(Catalog::embedded(), None);
        assert_eq!(i18n.language(), Language::Indonesian);
        assert_eq!(i18n.tr("nav.language"), "Bahasa");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::new(Catalog::embedded(), Some("id"));
        assert_eq!(
            i18n.tr_with_args("notification.alertCreated", &[("ticker", "BBRI.JK")]),
            "Alert untuk BBRI.JK berhasil dibuat"
        );
    }

    #[test]
    fn tr_without_args_keeps_placeholder_visible() {
        let i18n = I18n::new(Catalog::embedded(), Some("en"));
        let text = i18n.tr("notification.alertCreated");
        assert!(text.starts_with("Alert for "));
        assert!(text.contains("ticker"));
    }
}
