// SPDX-License-Identifier: MPL-2.0
//! The closed set of display languages.

use crate::config::defaults::DEFAULT_LANGUAGE_CODE;
use std::fmt;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Bahasa Indonesia (`id`), the page's home language.
    Indonesian,
    /// English (`en`).
    English,
}

impl Language {
    /// Every supported language, in catalog order.
    pub const ALL: [Language; 2] = [Language::Indonesian, Language::English];

    /// Returns the short code used in markup, storage and file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    /// Parses a language code. Only exact codes from the supported set match.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Picks the active language from a stored preference, falling back to
    /// the default when nothing valid was stored.
    #[must_use]
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored {
            Some(code) => Self::from_code(code).unwrap_or_else(|| {
                tracing::debug!(code, "ignoring unsupported stored language");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        // The default code is a compile-time constant from the supported set.
        Self::from_code(DEFAULT_LANGUAGE_CODE).unwrap_or(Language::Indonesian)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("en-US"), None);
    }

    #[test]
    fn default_is_indonesian() {
        assert_eq!(Language::default(), Language::Indonesian);
    }

    #[test]
    fn resolve_prefers_valid_stored_value() {
        assert_eq!(Language::resolve(Some("en")), Language::English);
    }

    #[test]
    fn resolve_falls_back_on_missing_or_invalid_value() {
        assert_eq!(Language::resolve(None), Language::Indonesian);
        assert_eq!(Language::resolve(Some("klingon")), Language::Indonesian);
    }
}
