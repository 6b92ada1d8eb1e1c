// SPDX-License-Identifier: MPL-2.0
//! In-memory page model implementing [`Renderer`].
//!
//! Used for headless rendering (server-side snapshots, tests) where there is
//! no browser DOM. Elements are kept in document order and addressed by the
//! index returned from [`Document::push`].

use super::notifications::{NotificationId, Toast};
use super::renderer::{ElementKind, LocalizableNode, Marker, NodeId, Renderer};
use std::collections::BTreeMap;

/// A page element with the properties localization can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub placeholder: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Shorthand for a `data-i18n` marker.
    #[must_use]
    pub fn localized(self, key: impl Into<String>) -> Self {
        self.with_attribute(Marker::Text.attribute(), key)
    }

    /// Shorthand for a `data-i18n-placeholder` marker.
    #[must_use]
    pub fn localized_placeholder(self, key: impl Into<String>) -> Self {
        self.with_attribute(Marker::Placeholder.attribute(), key)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A toast attached to the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastNode {
    pub toast: Toast,
    pub exiting: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    title: String,
    elements: Vec<Element>,
    toasts: Vec<ToastNode>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its handle.
    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Attached toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[ToastNode] {
        &self.toasts
    }

    #[must_use]
    pub fn toast(&self, id: NotificationId) -> Option<&ToastNode> {
        self.toasts.iter().find(|node| node.toast.id == id)
    }

    fn toast_mut(&mut self, id: NotificationId) -> Option<&mut ToastNode> {
        self.toasts.iter_mut().find(|node| node.toast.id == id)
    }
}

impl Renderer for Document {
    fn localizable_nodes(&mut self) -> Vec<LocalizableNode> {
        let mut nodes = Vec::new();
        for (index, element) in self.elements.iter().enumerate() {
            for marker in Marker::ALL {
                if let Some(key) = element.attribute(marker.attribute()) {
                    nodes.push(LocalizableNode {
                        node: NodeId(index),
                        marker,
                        kind: ElementKind::from_tag(&element.tag),
                        key: key.to_string(),
                    });
                }
            }
        }
        nodes
    }

    fn render_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.text = text.to_string();
        }
    }

    fn render_placeholder(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.placeholder = Some(text.to_string());
        }
    }

    fn render_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn append_toast(&mut self, toast: &Toast) {
        self.toasts.push(ToastNode {
            toast: toast.clone(),
            exiting: false,
        });
    }

    fn begin_toast_exit(&mut self, id: NotificationId) {
        if let Some(node) = self.toast_mut(id) {
            node.exiting = true;
        }
    }

    fn remove_toast(&mut self, id: NotificationId) {
        self.toasts.retain(|node| node.toast.id != id);
    }
}
