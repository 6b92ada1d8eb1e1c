// SPDX-License-Identifier: MPL-2.0
//! Rendering-side modules: the renderer capability, the in-memory document,
//! page localization and the toast notification stack.

pub mod design_tokens;
pub mod document;
pub mod notifications;
pub mod page;
pub mod renderer;
