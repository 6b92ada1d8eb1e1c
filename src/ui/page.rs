// SPDX-License-Identifier: MPL-2.0
//! Rewrites localizable page text from the catalog.

use super::renderer::{ElementKind, Marker, Renderer};
use crate::config::defaults::{TAGLINE_KEY, TITLE_KEY, TITLE_SEPARATOR};
use crate::i18n::I18n;

/// Document title in the active language: `<app title> - <tagline>`.
#[must_use]
pub fn document_title(i18n: &I18n) -> String {
    format!("{}{}{}", i18n.tr(TITLE_KEY), TITLE_SEPARATOR, i18n.tr(TAGLINE_KEY))
}

/// Applies the active language to every localizable element and the document
/// title. Returns the number of element updates made.
///
/// Text markers on text-entry elements update the placeholder, since those
/// elements show no body text. Placeholder markers always update the
/// placeholder.
pub fn apply<R: Renderer + ?Sized>(renderer: &mut R, i18n: &I18n) -> usize {
    let nodes = renderer.localizable_nodes();
    for node in &nodes {
        let text = i18n.tr(&node.key);
        match (node.marker, node.kind) {
            (Marker::Text, ElementKind::Other) => renderer.render_text(node.node, &text),
            (Marker::Text, ElementKind::TextEntry) | (Marker::Placeholder, _) => {
                renderer.render_placeholder(node.node, &text);
            }
        }
    }
    renderer.render_title(&document_title(i18n));
    tracing::debug!(language = %i18n.language(), updated = nodes.len(), "applied page language");
    nodes.len()
}
