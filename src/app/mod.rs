// SPDX-License-Identifier: MPL-2.0
//! Page shell: the context object behind the page's public entry points.
//!
//! [`Shell`] owns the localization context, the toast manager, the preference
//! store, the renderer and the clock. The rest of the page talks to it
//! through four operations: translate a key, switch language, show a
//! notification and remove one.
//!
//! Deferred work (the first page localization pass, toast timers) runs from
//! [`Shell::tick`]. Hosts either call `tick` from their own event loop, using
//! [`Shell::next_deadline`] to know when, or hand the shell to
//! [`runtime::run_until_idle`].

pub mod paths;
pub mod persistence;
pub mod runtime;

use crate::config::defaults::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::i18n::{Catalog, I18n, Language};
use crate::scheduler::{Clock, Scheduler, SystemClock};
use crate::ui::notifications::{Manager, Notification, NotificationId, Severity, Transition};
use crate::ui::page;
use crate::ui::renderer::Renderer;
use persistence::PreferenceStore;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ShellTask {
    /// Initial localization pass, once the page has been built.
    LocalizePage,
}

pub struct Shell<R, P, C = SystemClock> {
    i18n: I18n,
    notifications: Manager,
    renderer: R,
    store: P,
    clock: C,
    tasks: Scheduler<ShellTask>,
}

impl<R, P, C> Shell<R, P, C>
where
    R: Renderer,
    P: PreferenceStore,
    C: Clock,
{
    /// Creates a shell over the embedded catalog.
    pub fn new(renderer: R, store: P, clock: C) -> Self {
        Self::with_catalog(Catalog::embedded(), renderer, store, clock)
    }

    /// Creates a shell over `catalog`. The active language is read from
    /// `store`; the page itself is localized on the first [`tick`](Self::tick).
    pub fn with_catalog(catalog: Catalog, renderer: R, store: P, clock: C) -> Self {
        let stored = store.load_language();
        let i18n = I18n::new(catalog, stored.as_deref());
        tracing::debug!(language = %i18n.language(), ?stored, "page shell created");

        let mut tasks = Scheduler::new();
        tasks.schedule(ShellTask::LocalizePage, clock.now());

        Self {
            i18n,
            notifications: Manager::new(),
            renderer,
            store,
            clock,
            tasks,
        }
    }

    /// Translates `key` in the active language, or returns `key` itself.
    pub fn translate(&self, key: &str) -> String {
        self.i18n.tr(key)
    }

    pub fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.i18n.tr_with_args(key, args)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    /// Switches the display language.
    ///
    /// Unsupported codes are ignored and `false` is returned. Otherwise the
    /// choice is persisted, the page is re-localized and a confirmation toast
    /// is shown in the new language. A failure to persist is logged and does
    /// not undo the switch.
    pub fn switch_language(&mut self, code: &str) -> bool {
        let Some(language) = Language::from_code(code) else {
            tracing::debug!(code, "ignoring unsupported language");
            return false;
        };

        self.i18n.set_language(language);
        if let Err(err) = self.store.save_language(language.code()) {
            tracing::warn!(%language, error = %err, "failed to persist language preference");
        }

        self.tasks.cancel(ShellTask::LocalizePage);
        self.apply_to_page();

        let message = self.i18n.tr("notification.languageChanged");
        self.notify(
            Notification::success(message).auto_dismiss_ms(DEFAULT_NOTIFICATION_DURATION_MS),
        );
        true
    }

    /// Rewrites all localizable page text in the active language.
    pub fn apply_to_page(&mut self) -> usize {
        page::apply(&mut self.renderer, &self.i18n)
    }

    /// Shows a toast. `severity` defaults to `info` (unknown names too) and
    /// `duration_ms` to four seconds; zero or less keeps the toast until it is
    /// removed.
    pub fn show_notification(
        &mut self,
        message: impl Into<String>,
        severity: Option<&str>,
        duration_ms: Option<i64>,
    ) -> NotificationId {
        let severity = severity.map(Severity::from_name).unwrap_or_default();
        let duration_ms = duration_ms.unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS);
        self.notify(Notification::new(severity, message).auto_dismiss_ms(duration_ms))
    }

    /// Shows a prepared notification.
    pub fn notify(&mut self, notification: Notification) -> NotificationId {
        let now = self.clock.now();
        self.notifications
            .push(notification, &self.i18n, &mut self.renderer, now)
    }

    /// Removes a toast. Unknown or already removed ids are ignored.
    pub fn remove_notification(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.notifications.dismiss(id, &mut self.renderer, now)
    }

    /// Removes a toast by its printed id, as carried by the dismiss button.
    pub fn remove_notification_by_str(&mut self, id: &str) -> bool {
        match id.parse() {
            Ok(id) => self.remove_notification(id),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring dismiss for malformed id");
                false
            }
        }
    }

    /// Runs every deferred task that is due.
    pub fn tick(&mut self) -> Vec<Transition> {
        let now = self.clock.now();
        while let Some((task, _)) = self.tasks.pop_due(now) {
            match task {
                ShellTask::LocalizePage => {
                    self.apply_to_page();
                }
            }
        }
        self.notifications.tick(&mut self.renderer, now)
    }

    /// Earliest deadline across all deferred tasks, on the shell's clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.tasks.next_deadline(), self.notifications.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
