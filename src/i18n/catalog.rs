// SPDX-License-Identifier: MPL-2.0
//! The translation catalog: one Fluent bundle per supported language.
//!
//! Resources are embedded from `assets/i18n/<code>.ftl` at build time. Loading
//! never fails outright; problems are logged and kept in [`Catalog::issues`]
//! so the page still renders with whatever could be parsed.
//!
//! Page markup names entries with dotted keys (`app.title`,
//! `analysis.inputPlaceholder`). Fluent identifiers cannot contain dots, so
//! the `.ftl` files spell the same entries in kebab case (`app-title`,
//! `analysis-input-placeholder`) and every lookup goes through
//! [`message_id`]. Both spellings resolve.

use super::language::Language;
use crate::error::CatalogError;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Maps a page key to the Fluent message id that stores it.
///
/// `.` and `_` become `-`, and each uppercase letter becomes `-` followed by
/// its lowercase form. Keys that are already Fluent ids are returned as is.
#[must_use]
pub fn message_id(key: &str) -> Cow<'_, str> {
    if !key
        .chars()
        .any(|c| c == '.' || c == '_' || c.is_ascii_uppercase())
    {
        return Cow::Borrowed(key);
    }

    let mut id = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        match c {
            '.' | '_' => id.push('-'),
            c if c.is_ascii_uppercase() => {
                id.push('-');
                id.push(c.to_ascii_lowercase());
            }
            c => id.push(c),
        }
    }
    Cow::Owned(id)
}

pub struct Catalog {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    keys: HashMap<Language, BTreeSet<String>>,
    issues: Vec<CatalogError>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("languages", &self.languages())
            .field("issues", &self.issues)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Builds the catalog from the `.ftl` files compiled into the crate.
    pub fn embedded() -> Self {
        let sources = Asset::iter().filter_map(|file| {
            let filename = file.as_ref();
            let code = filename.strip_suffix(".ftl")?;
            let content = Asset::get(filename)?;
            Some((
                code.to_string(),
                String::from_utf8_lossy(content.data.as_ref()).into_owned(),
            ))
        });
        Self::from_sources(sources)
    }

    /// Builds a catalog from `(language code, ftl source)` pairs.
    ///
    /// Several sources for the same language are merged; a key defined more
    /// than once keeps its last definition.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (S, String)>,
        S: AsRef<str>,
    {
        let mut catalog = Self {
            bundles: HashMap::new(),
            keys: HashMap::new(),
            issues: Vec::new(),
        };
        for (code, source) in sources {
            catalog.add_source(code.as_ref(), source);
        }
        for (language, key) in catalog.coverage_gaps() {
            tracing::warn!(%language, key, "translation missing");
        }
        catalog
    }

    fn add_source(&mut self, code: &str, source: String) {
        let Some(language) = Language::from_code(code) else {
            tracing::warn!(code, "skipping catalog for unsupported language");
            self.issues
                .push(CatalogError::UnknownLanguage(code.to_string()));
            return;
        };
        let Ok(locale) = code.parse::<LanguageIdentifier>() else {
            self.issues
                .push(CatalogError::UnknownLanguage(code.to_string()));
            return;
        };

        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!(%language, errors = errors.len(), "catalog parsed with errors");
                self.issues.push(CatalogError::Parse {
                    language: code.to_string(),
                    errors: errors.len(),
                });
                resource
            }
        };

        let known = self.keys.entry(language).or_default();
        let mut defined = BTreeSet::new();
        for entry in resource.entries() {
            if let ast::Entry::Message(message) = entry {
                let key = message.id.name;
                if !defined.insert(key) || known.contains(key) {
                    tracing::warn!(%language, key, "duplicate translation key, last definition wins");
                    self.issues.push(CatalogError::DuplicateKey {
                        language: code.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }
        known.extend(defined.into_iter().map(str::to_string));

        let bundle = self.bundles.entry(language).or_insert_with(|| {
            let mut bundle = FluentBundle::new(vec![locale]);
            bundle.set_use_isolating(false);
            bundle
        });
        bundle.add_resource_overriding(resource);
    }

    /// Formats `key` in `language`. `key` may be a page key or a Fluent id.
    /// Returns `None` when the key is unknown.
    ///
    /// Formatting errors (such as a missing argument) are logged; the partially
    /// formatted text is still returned.
    pub fn lookup(
        &self,
        language: Language,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(&message_id(key))?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%language, key, ?errors, "translation formatted with errors");
        }
        Some(value.into_owned())
    }

    /// Returns whether `language` defines `key`.
    #[must_use]
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.keys
            .get(&language)
            .is_some_and(|keys| keys.contains(message_id(key).as_ref()))
    }

    /// Languages with at least one loaded resource.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.bundles.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Fluent ids defined for `language`, in sorted order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.keys
            .get(&language)
            .into_iter()
            .flat_map(|keys| keys.iter().map(String::as_str))
    }

    /// Keys defined in some language but missing from another.
    ///
    /// The catalog does not enforce parity; this is for reporting and tests.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<(Language, String)> {
        let all: BTreeSet<&str> = self
            .keys
            .values()
            .flat_map(|keys| keys.iter().map(String::as_str))
            .collect();

        let mut gaps = Vec::new();
        for language in self.languages() {
            for key in &all {
                if !self.contains(language, key) {
                    gaps.push((language, (*key).to_string()));
                }
            }
        }
        gaps
    }

    /// Problems recorded while loading.
    #[must_use]
    pub fn issues(&self) -> &[CatalogError] {
        &self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(code: &str, ftl: &str) -> (String, String) {
        (code.to_string(), ftl.to_string())
    }

    #[test]
    fn embedded_catalog_loads_every_language() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.languages(), Language::ALL.to_vec());
        assert!(catalog.issues().is_empty(), "{:?}", catalog.issues());
    }

    #[test]
    fn embedded_catalog_has_no_coverage_gaps() {
        let catalog = Catalog::embedded();
        assert!(catalog.coverage_gaps().is_empty(), "{:?}", catalog.coverage_gaps());
    }

    #[test]
    fn lookup_returns_language_specific_text() {
        let catalog = Catalog::embedded();
        assert_eq!(
            catalog.lookup(Language::Indonesian, "notif-success", None).as_deref(),
            Some("Berhasil!")
        );
        assert_eq!(
            catalog.lookup(Language::English, "notif-success", None).as_deref(),
            Some("Success!")
        );
    }

    #[test]
    fn page_keys_map_to_message_ids() {
        assert_eq!(message_id("app.title"), "app-title");
        assert_eq!(
            message_id("analysis.inputPlaceholder"),
            "analysis-input-placeholder"
        );
        assert_eq!(message_id("docs.feature3Desc"), "docs-feature3-desc");
        assert_eq!(message_id("alert_form.ticker"), "alert-form-ticker");
        assert!(matches!(message_id("app-title"), Cow::Borrowed("app-title")));
    }

    #[test]
    fn lookup_accepts_page_keys() {
        let catalog = Catalog::embedded();
        assert_eq!(
            catalog.lookup(Language::English, "app.title", None).as_deref(),
            Some("StockPro AI")
        );
        assert_eq!(
            catalog.lookup(Language::Indonesian, "watchlist.addButton", None),
            catalog.lookup(Language::Indonesian, "watchlist-add-button", None)
        );
        assert!(catalog.contains(Language::English, "analysis.inputPlaceholder"));
        assert!(!catalog.contains(Language::English, "analysis.outputPlaceholder"));
    }

    #[test]
    fn lookup_of_unknown_key_is_none() {
        let catalog = Catalog::embedded();
        assert!(catalog.lookup(Language::English, "no-such-key", None).is_none());
    }

    #[test]
    fn duplicate_key_keeps_last_definition() {
        let catalog = Catalog::from_sources([source(
            "en",
            "watchlist-title = First\nwatchlist-title = Second\n",
        )]);

        assert_eq!(
            catalog.lookup(Language::English, "watchlist-title", None).as_deref(),
            Some("Second")
        );
        assert_eq!(
            catalog.issues(),
            &[CatalogError::DuplicateKey {
                language: "en".into(),
                key: "watchlist-title".into(),
            }]
        );
    }

    #[test]
    fn duplicate_across_sources_of_same_language_is_reported() {
        let catalog = Catalog::from_sources([
            source("en", "greeting = Hello\n"),
            source("en", "greeting = Hi\n"),
        ]);

        assert_eq!(
            catalog.lookup(Language::English, "greeting", None).as_deref(),
            Some("Hi")
        );
        assert_eq!(catalog.issues().len(), 1);
    }

    #[test]
    fn unsupported_language_file_is_skipped() {
        let catalog = Catalog::from_sources([source("fr", "greeting = Bonjour\n")]);
        assert!(catalog.languages().is_empty());
        assert_eq!(
            catalog.issues(),
            &[CatalogError::UnknownLanguage("fr".into())]
        );
    }

    #[test]
    fn parse_errors_keep_valid_entries() {
        let catalog = Catalog::from_sources([source(
            "en",
            "good = Fine\n!!! broken\nalso-good = Still fine\n",
        )]);

        assert_eq!(
            catalog.lookup(Language::English, "good", None).as_deref(),
            Some("Fine")
        );
        assert_eq!(
            catalog.lookup(Language::English, "also-good", None).as_deref(),
            Some("Still fine")
        );
        assert!(matches!(
            catalog.issues(),
            [CatalogError::Parse { errors, .. }] if *errors > 0
        ));
    }

    #[test]
    fn coverage_gaps_lists_keys_missing_per_language() {
        let catalog = Catalog::from_sources([
            source("en", "shared = Shared\nonly-en = English only\n"),
            source("id", "shared = Bersama\n"),
        ]);

        assert_eq!(
            catalog.coverage_gaps(),
            vec![(Language::Indonesian, "only-en".to_string())]
        );
    }

    #[test]
    fn interpolation_has_no_isolation_marks() {
        let catalog = Catalog::embedded();
        let mut args = FluentArgs::new();
        args.set("ticker", "BBCA.JK");

        assert_eq!(
            catalog
                .lookup(Language::English, "notification-alert-created", Some(&args))
                .as_deref(),
            Some("Alert for BBCA.JK created successfully")
        );
    }
}
