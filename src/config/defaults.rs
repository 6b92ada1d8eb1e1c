// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Language**: Fallback language and the preference storage key
//! - **Notifications**: Toast lifetime and exit transition timing
//! - **Page**: Document title composition

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Language used when no valid preference has been stored.
pub const DEFAULT_LANGUAGE_CODE: &str = "id";

/// Name under which the language preference is persisted.
pub const LANGUAGE_PREFERENCE_KEY: &str = "stockpro_lang";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast lifetime in milliseconds.
pub const DEFAULT_NOTIFICATION_DURATION_MS: i64 = 4000;

/// Length of the slide-out animation played before a toast is detached.
pub const EXIT_TRANSITION_MS: u64 = 300;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Catalog key for the application name shown in the document title.
pub const TITLE_KEY: &str = "app.title";

/// Catalog key for the tagline appended to the document title.
pub const TAGLINE_KEY: &str = "app.tagline";

/// Separator placed between the title and the tagline.
pub const TITLE_SEPARATOR: &str = " - ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_is_positive() {
        assert!(DEFAULT_NOTIFICATION_DURATION_MS > 0);
    }

    #[test]
    fn exit_transition_is_shorter_than_default_duration() {
        assert!((EXIT_TRANSITION_MS as i64) < DEFAULT_NOTIFICATION_DURATION_MS);
    }
}
