// SPDX-License-Identifier: MPL-2.0
//! The rendering capability the page logic draws through.
//!
//! Localization and the toast lifecycle never touch a UI toolkit directly.
//! They ask a [`Renderer`] for the localizable elements on the page and tell
//! it what text to show and which toast nodes to attach or detach.

use super::notifications::{NotificationId, Toast};

/// Attribute marking an element whose body text comes from the catalog.
pub const TEXT_MARKER: &str = "data-i18n";

/// Attribute marking an element whose placeholder comes from the catalog.
pub const PLACEHOLDER_MARKER: &str = "data-i18n-placeholder";

/// Which marker attribute opted an element into localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Text,
    Placeholder,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::Text, Marker::Placeholder];

    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Marker::Text => TEXT_MARKER,
            Marker::Placeholder => PLACEHOLDER_MARKER,
        }
    }
}

/// Broad element category, as far as localization cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `input` and `textarea`: text markers land in the placeholder.
    TextEntry,
    Other,
}

impl ElementKind {
    /// Classifies an element by tag name, ignoring case.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            ElementKind::TextEntry
        } else {
            ElementKind::Other
        }
    }
}

/// Renderer-assigned handle for a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One marker on one element. An element carrying both markers is reported
/// twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableNode {
    pub node: NodeId,
    pub marker: Marker,
    pub kind: ElementKind,
    /// Catalog key taken from the marker attribute's value.
    pub key: String,
}

pub trait Renderer {
    /// Scans the page for localizable elements, in document order.
    fn localizable_nodes(&mut self) -> Vec<LocalizableNode>;

    /// Replaces the body text of `node`.
    fn render_text(&mut self, node: NodeId, text: &str);

    /// Replaces the placeholder text of `node`.
    fn render_placeholder(&mut self, node: NodeId, text: &str);

    /// Replaces the document title.
    fn render_title(&mut self, title: &str);

    /// Appends a toast at the end of the notification stack.
    fn append_toast(&mut self, toast: &Toast);

    /// Starts the exit transition of a toast still attached to the stack.
    fn begin_toast_exit(&mut self, id: NotificationId);

    /// Detaches a toast. Unknown ids are ignored.
    fn remove_toast(&mut self, id: NotificationId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_entry_tags_are_case_insensitive() {
        assert_eq!(ElementKind::from_tag("INPUT"), ElementKind::TextEntry);
        assert_eq!(ElementKind::from_tag("textarea"), ElementKind::TextEntry);
        assert_eq!(ElementKind::from_tag("TextArea"), ElementKind::TextEntry);
    }

    #[test]
    fn other_tags_are_not_text_entry() {
        for tag in ["span", "button", "select", "h1", ""] {
            assert_eq!(ElementKind::from_tag(tag), ElementKind::Other, "{tag}");
        }
    }

    #[test]
    fn marker_attributes() {
        assert_eq!(Marker::Text.attribute(), "data-i18n");
        assert_eq!(Marker::Placeholder.attribute(), "data-i18n-placeholder");
    }
}
