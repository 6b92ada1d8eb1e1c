// SPDX-License-Identifier: MPL-2.0
//! Toast view model for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: a card with a
//! severity icon, a localized title, the message body and a dismiss button.
//! [`Toast::view`] resolves everything a renderer needs; [`Toast::to_html`]
//! produces the card markup for DOM-backed renderers.

use super::notification::{Notification, NotificationId, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{motion, opacity, palette, radius, sizing};
use std::fmt::Write as _;

/// Attribute on the dismiss button holding the printed notification id.
/// Clicking the button removes the toast with that id.
pub const DISMISS_ATTRIBUTE: &str = "data-dismiss";

/// Everything needed to draw one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: NotificationId,
    pub severity: Severity,
    pub icon: &'static str,
    /// Severity title in the active language.
    pub title: String,
    pub message: String,
}

impl Toast {
    /// Builds the toast for `notification`, localizing its title.
    pub fn view(notification: &Notification, i18n: &I18n) -> Self {
        let severity = notification.severity();
        let style = severity.style();
        Self {
            id: notification.id(),
            severity,
            icon: style.icon,
            title: i18n.tr(style.title_key),
            message: notification.message().to_string(),
        }
    }

    /// Inline CSS for the card while it slides in.
    #[must_use]
    pub fn card_style(&self) -> String {
        let style = self.severity.style();
        let mut css = String::new();
        let _ = write!(
            css,
            "background: linear-gradient(135deg, {} 0%, {} 100%); ",
            style.accent.rgba(opacity::SURFACE),
            style.accent_dark.rgba(opacity::SURFACE)
        );
        let _ = write!(css, "color: {}; ", palette::WHITE.hex());
        let _ = write!(css, "padding: 16px 20px; border-radius: {}px; ", radius::TOAST);
        let _ = write!(
            css,
            "border-left: {}px solid {}; ",
            sizing::ACCENT_BORDER,
            style.accent.hex()
        );
        let _ = write!(
            css,
            "box-shadow: 0 8px 32px {}; ",
            style.accent.rgba(opacity::SHADOW)
        );
        let _ = write!(
            css,
            "display: flex; align-items: start; gap: 12px; min-width: {}px; max-width: {}px; ",
            sizing::TOAST_MIN_WIDTH,
            sizing::TOAST_MAX_WIDTH
        );
        let _ = write!(
            css,
            "pointer-events: all; animation: {} 0.3s {};",
            motion::SLIDE_IN,
            motion::EASING
        );
        css
    }

    /// Inline CSS animation applied when the exit transition starts.
    #[must_use]
    pub fn exit_animation() -> String {
        format!("{} 0.3s {}", motion::SLIDE_OUT, motion::EASING)
    }

    /// Card markup. Title and message are escaped; the dismiss button carries
    /// the printed id in [`DISMISS_ATTRIBUTE`].
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div style="font-size: 1.5rem; line-height: 1;"><i class="bi {}"></i></div>"#,
            self.icon
        );
        let _ = write!(
            html,
            r#"<div style="flex: 1;"><div style="font-weight: 600; font-size: 0.95rem; margin-bottom: 4px;">{}</div><div style="font-size: 0.85rem; opacity: 0.9; line-height: 1.4;">{}</div></div>"#,
            escape_html(&self.title),
            escape_html(&self.message)
        );
        let _ = write!(
            html,
            r#"<button type="button" {}="{}" style="background: none; border: none; color: inherit; cursor: pointer; opacity: {}; border-radius: {}px;"><i class="bi bi-x-lg"></i></button>"#,
            DISMISS_ATTRIBUTE,
            self.id,
            opacity::DISMISS_IDLE,
            radius::BUTTON
        );
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, I18n};

    #[test]
    fn title_follows_active_language() {
        let notification = Notification::success("Saved");

        let id = I18n::new(Catalog::embedded(), Some("id"));
        let en = I18n::new(Catalog::embedded(), Some("en"));

        assert_eq!(Toast::view(&notification, &id).title, "Berhasil!");
        assert_eq!(Toast::view(&notification, &en).title, "Success!");
    }

    #[test]
    fn unknown_severity_uses_info_presentation() {
        let i18n = I18n::new(Catalog::embedded(), Some("en"));
        let notification = Notification::new(Severity::from_name("debug"), "Trace");
        let toast = Toast::view(&notification, &i18n);

        assert_eq!(toast.icon, "bi-info-circle-fill");
        assert_eq!(toast.title, "Information");
        assert!(toast.card_style().contains(&palette::INFO_500.hex()));
    }

    #[test]
    fn html_escapes_message() {
        let i18n = I18n::new(Catalog::embedded(), Some("en"));
        let notification = Notification::error("<script>alert('x')</script>");
        let html = Toast::view(&notification, &i18n).to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn html_carries_dismiss_id_and_icon() {
        let i18n = I18n::new(Catalog::embedded(), Some("en"));
        let notification = Notification::warning("Careful");
        let toast = Toast::view(&notification, &i18n);
        let html = toast.to_html();

        assert!(html.contains(&format!(r#"data-dismiss="{}""#, notification.id())));
        assert!(html.contains("bi-exclamation-triangle-fill"));
        assert!(html.contains("Warning"));
    }

    #[test]
    fn card_style_uses_severity_accent() {
        let i18n = I18n::new(Catalog::embedded(), None);
        let toast = Toast::view(&Notification::error("Boom"), &i18n);
        let css = toast.card_style();

        assert!(css.contains("border-left: 4px solid #ef4444"));
        assert!(css.contains(motion::SLIDE_IN));
    }
}
