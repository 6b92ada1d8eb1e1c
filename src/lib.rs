// SPDX-License-Identifier: MPL-2.0
//! `stockpro_ui` is the presentation layer of the StockPro AI stock-analysis
//! page.
//!
//! It provides a Fluent translation catalog with a persisted language
//! preference, and a toast notification stack with auto-dismiss timers. All
//! page output goes through the [`ui::renderer::Renderer`] trait, so the same
//! logic drives the browser DOM (`web` feature) and the in-memory
//! [`ui::document::Document`].

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod scheduler;
pub mod ui;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
