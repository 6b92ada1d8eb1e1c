// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (alert
//! saved, language changed, request failed) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for the toast stack and its timers
//! - [`toast`] - `Toast` view model handed to renderers
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use stockpro_ui::i18n::I18n;
//! use stockpro_ui::ui::document::Document;
//! use stockpro_ui::ui::notifications::{Manager, Severity};
//!
//! let i18n = I18n::default();
//! let mut page = Document::new();
//! let mut manager = Manager::new();
//!
//! let id = manager.show("Alert saved", Severity::Success, 4000, &i18n, &mut page, Duration::ZERO);
//! assert_eq!(page.toasts().len(), 1);
//!
//! manager.tick(&mut page, Duration::from_millis(4300));
//! assert!(page.toast(id).is_none());
//! ```
//!
//! # Design Considerations
//!
//! - Default lifetime: 4 s; zero or negative means manual dismiss only
//! - Exit transition: 300 ms slide-out before the node is detached
//! - Position: top-right stack, newest at the bottom

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Transition};
pub use notification::{
    InvalidNotificationId, Notification, NotificationId, Phase, Severity, SeverityStyle,
};
pub use toast::{Toast, DISMISS_ATTRIBUTE};
