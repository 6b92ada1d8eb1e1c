// SPDX-License-Identifier: MPL-2.0
//! Browser bindings (`web` feature, `wasm32` only).
//!
//! [`DomRenderer`] draws into the live document, [`LocalStorageStore`] keeps
//! the language preference in `localStorage`, and [`StockProPage`] exports
//! the page's entry points to JavaScript.
//!
//! The page drives itself: every call that adds deferred work arms a
//! `setTimeout` for the next deadline, and a click listener on the
//! `notification-container` element removes the toast named by the clicked
//! button's `data-dismiss` attribute. `tick()` and `nextDeadlineMs()` stay
//! exported for hosts that run their own loop.

use crate::app::persistence::PreferenceStore;
use crate::app::Shell;
use crate::config::defaults::LANGUAGE_PREFERENCE_KEY;
use crate::error::{Error, Result};
use crate::scheduler::Clock;
use crate::ui::design_tokens::{spacing, sizing, TOAST_LAYER};
use crate::ui::notifications::{NotificationId, Toast, DISMISS_ATTRIBUTE};
use crate::ui::renderer::{ElementKind, LocalizableNode, Marker, NodeId, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Storage};

const CONTAINER_ID: &str = "notification-container";

fn js_error(err: JsValue) -> Error {
    Error::Io(format!("{err:?}"))
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Io("no document".to_string()))
}

/// Renders into the browser DOM.
pub struct DomRenderer {
    document: Document,
    /// Elements from the last scan; `NodeId` indexes into it.
    scanned: Vec<Element>,
}

impl DomRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            document: document()?,
            scanned: Vec::new(),
        })
    }

    fn container(&self) -> Option<Element> {
        if let Some(existing) = self.document.get_element_by_id(CONTAINER_ID) {
            return Some(existing);
        }
        let container = self.document.create_element("div").ok()?;
        container.set_id(CONTAINER_ID);
        let style = format!(
            "position: fixed; top: {}px; right: {}px; z-index: {}; display: flex; \
             flex-direction: column; gap: {}px; max-width: {}px; pointer-events: none;",
            spacing::STACK_TOP,
            spacing::STACK_RIGHT,
            TOAST_LAYER,
            spacing::STACK_GAP,
            sizing::TOAST_MAX_WIDTH
        );
        container.set_attribute("style", &style).ok()?;
        self.document.body()?.append_child(&container).ok()?;
        Some(container)
    }

    fn toast_element(&self, id: NotificationId) -> Option<Element> {
        self.document.get_element_by_id(&id.to_string())
    }
}

impl Renderer for DomRenderer {
    fn localizable_nodes(&mut self) -> Vec<LocalizableNode> {
        self.scanned.clear();
        let selector = format!("[{}], [{}]", Marker::Text.attribute(), Marker::Placeholder.attribute());
        let Ok(list) = self.document.query_selector_all(&selector) else {
            return Vec::new();
        };

        let mut nodes = Vec::new();
        for index in 0..list.length() {
            let Some(element) = list.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let node = NodeId(self.scanned.len());
            let kind = ElementKind::from_tag(&element.tag_name());
            for marker in Marker::ALL {
                if let Some(key) = element.get_attribute(marker.attribute()) {
                    nodes.push(LocalizableNode {
                        node,
                        marker,
                        kind,
                        key,
                    });
                }
            }
            self.scanned.push(element);
        }
        nodes
    }

    fn render_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.scanned.get(node.0) {
            element.set_text_content(Some(text));
        }
    }

    fn render_placeholder(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.scanned.get(node.0) {
            let _ = element.set_attribute("placeholder", text);
        }
    }

    fn render_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn append_toast(&mut self, toast: &Toast) {
        let Some(container) = self.container() else {
            tracing::warn!("notification container unavailable");
            return;
        };
        let Ok(card) = self.document.create_element("div") else {
            return;
        };
        card.set_id(&toast.id.to_string());
        let _ = card.set_attribute("style", &toast.card_style());
        card.set_inner_html(&toast.to_html());
        let _ = container.append_child(&card);
    }

    fn begin_toast_exit(&mut self, id: NotificationId) {
        if let Some(card) = self.toast_element(id) {
            let style = card.get_attribute("style").unwrap_or_default();
            let exiting = format!("{style} animation: {};", Toast::exit_animation());
            let _ = card.set_attribute("style", &exiting);
        }
    }

    fn remove_toast(&mut self, id: NotificationId) {
        if let Some(card) = self.toast_element(id) {
            card.remove();
        }
    }
}

/// Preference kept in the browser's `localStorage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load_language(&self) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(LANGUAGE_PREFERENCE_KEY)
            .ok()
            .flatten()
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::Io("localStorage unavailable".to_string()))?;
        storage
            .set_item(LANGUAGE_PREFERENCE_KEY, code)
            .map_err(js_error)
    }
}

/// Clock backed by `performance.now()`; `std::time::Instant` is not
/// available on `wasm32-unknown-unknown`.
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
    origin_ms: f64,
}

impl PerformanceClock {
    #[must_use]
    pub fn new() -> Self {
        let performance = web_sys::window().and_then(|window| window.performance());
        let origin_ms = performance.as_ref().map_or(0.0, web_sys::Performance::now);
        Self {
            performance,
            origin_ms,
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> Duration {
        let now_ms = self
            .performance
            .as_ref()
            .map_or(self.origin_ms, web_sys::Performance::now);
        Duration::from_secs_f64(((now_ms - self.origin_ms) / 1000.0).max(0.0))
    }
}

type PageShell = Shell<DomRenderer, LocalStorageStore, PerformanceClock>;

/// Returns the printed id of the toast whose dismiss button (or a child of
/// it) was clicked.
fn dismiss_target(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target
        .closest(&format!("[{DISMISS_ATTRIBUTE}]"))
        .ok()
        .flatten()?;
    button.get_attribute(DISMISS_ATTRIBUTE)
}

/// Arms a one-shot timer that ticks `shell` at its next deadline.
///
/// Extra timers are harmless; a tick with nothing due does nothing.
fn arm_timer(shell: &Rc<RefCell<PageShell>>) {
    let wait_ms = {
        let Ok(shell) = shell.try_borrow() else {
            return;
        };
        let Some(deadline) = shell.next_deadline() else {
            return;
        };
        deadline.saturating_sub(shell.clock().now()).as_millis()
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let weak = Rc::downgrade(shell);
    let callback = Closure::once_into_js(move || {
        let Some(shell) = weak.upgrade() else {
            return;
        };
        let ticked = match shell.try_borrow_mut() {
            Ok(mut page) => {
                page.tick();
                true
            }
            Err(_) => false,
        };
        if ticked {
            arm_timer(&shell);
        }
    });
    let timeout = i32::try_from(wait_ms).unwrap_or(i32::MAX);
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
    {
        tracing::warn!(error = ?err, "failed to arm page timer");
    }
}

/// The page's JavaScript-facing entry points.
#[wasm_bindgen]
pub struct StockProPage {
    shell: Rc<RefCell<PageShell>>,
    /// Keeps the dismiss listener alive for as long as the page.
    _on_dismiss: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl StockProPage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> std::result::Result<StockProPage, JsValue> {
        let renderer = DomRenderer::new().map_err(|err| JsValue::from_str(&err.to_string()))?;
        let container = renderer
            .container()
            .ok_or_else(|| JsValue::from_str("notification container unavailable"))?;
        let shell = Rc::new(RefCell::new(Shell::new(
            renderer,
            LocalStorageStore::new(),
            PerformanceClock::new(),
        )));

        let weak = Rc::downgrade(&shell);
        let on_dismiss = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(id) = dismiss_target(&event) else {
                return;
            };
            let Some(shell) = weak.upgrade() else {
                return;
            };
            let removed = match shell.try_borrow_mut() {
                Ok(mut page) => page.remove_notification_by_str(&id),
                Err(_) => false,
            };
            if removed {
                arm_timer(&shell);
            }
        });
        container.add_event_listener_with_callback("click", on_dismiss.as_ref().unchecked_ref())?;

        arm_timer(&shell);
        Ok(Self {
            shell,
            _on_dismiss: on_dismiss,
        })
    }

    /// Translate by key.
    pub fn t(&self, key: &str) -> String {
        self.shell.borrow().translate(key)
    }

    #[wasm_bindgen(js_name = switchLanguage)]
    pub fn switch_language(&self, code: &str) -> bool {
        let switched = self.shell.borrow_mut().switch_language(code);
        if switched {
            arm_timer(&self.shell);
        }
        switched
    }

    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(
        &self,
        message: &str,
        severity: Option<String>,
        duration_ms: Option<f64>,
    ) -> String {
        let id = self.shell.borrow_mut().show_notification(
            message,
            severity.as_deref(),
            duration_ms.map(|ms| ms as i64),
        );
        arm_timer(&self.shell);
        id.to_string()
    }

    #[wasm_bindgen(js_name = removeNotification)]
    pub fn remove_notification(&self, id: &str) -> bool {
        let removed = self.shell.borrow_mut().remove_notification_by_str(id);
        if removed {
            arm_timer(&self.shell);
        }
        removed
    }

    pub fn tick(&self) {
        self.shell.borrow_mut().tick();
    }

    /// Milliseconds from now until the next `tick()` is needed.
    #[wasm_bindgen(js_name = nextDeadlineMs)]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        let shell = self.shell.borrow();
        let deadline = shell.next_deadline()?;
        let wait = deadline.saturating_sub(shell.clock().now());
        Some(wait.as_secs_f64() * 1000.0)
    }
}
