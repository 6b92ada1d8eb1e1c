// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Embedded `.ftl` catalogs, one per supported language
//! - An explicit [`I18n`] context holding the active language
//! - Runtime language switching
//! - Unknown keys resolve to themselves, so gaps are visible on the page

pub mod catalog;
pub mod fluent;
pub mod language;

pub use catalog::Catalog;
pub use fluent::I18n;
pub use language::Language;
