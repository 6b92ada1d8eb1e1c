// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the toast stack and the timers that drive it. Each
//! visible toast with a lifetime has a pending auto-dismiss task; dismissing
//! it (by timer or by hand) starts the exit transition, and a detach task
//! removes the node once the transition has played.

use super::notification::{Notification, NotificationId, Phase, Severity};
use super::toast::Toast;
use crate::config::defaults::EXIT_TRANSITION_MS;
use crate::i18n::I18n;
use crate::scheduler::Scheduler;
use crate::ui::renderer::Renderer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Timer {
    AutoDismiss(NotificationId),
    Detach(NotificationId),
}

/// A lifecycle step taken by a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: NotificationId,
    pub phase: Phase,
}

/// Manages the toast stack and its timers.
#[derive(Debug, Default)]
pub struct Manager {
    /// Attached toasts, oldest first.
    stack: Vec<Notification>,
    timers: Scheduler<Timer>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `notification` at the end of the stack and arms its
    /// auto-dismiss timer.
    pub fn push<R: Renderer + ?Sized>(
        &mut self,
        mut notification: Notification,
        i18n: &I18n,
        renderer: &mut R,
        now: Duration,
    ) -> NotificationId {
        let id = notification.id();
        renderer.append_toast(&Toast::view(&notification, i18n));
        notification.set_phase(Phase::Visible);

        if let Some(lifetime) = notification.lifetime() {
            self.timers.schedule(Timer::AutoDismiss(id), now + lifetime);
        }
        tracing::debug!(
            %id,
            severity = %notification.severity(),
            lifetime_ms = notification.lifetime().map(|d| d.as_millis() as u64),
            "notification shown"
        );
        self.stack.push(notification);
        id
    }

    /// Shows `message` with the given severity. A `duration_ms` of zero or less
    /// keeps the toast until it is dismissed.
    pub fn show<R: Renderer + ?Sized>(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: i64,
        i18n: &I18n,
        renderer: &mut R,
        now: Duration,
    ) -> NotificationId {
        let notification = Notification::new(severity, message).auto_dismiss_ms(duration_ms);
        self.push(notification, i18n, renderer, now)
    }

    /// Starts the exit transition for a visible toast.
    ///
    /// Returns `false` when the toast is unknown, already exiting or already
    /// removed; nothing happens in that case.
    pub fn dismiss<R: Renderer + ?Sized>(
        &mut self,
        id: NotificationId,
        renderer: &mut R,
        now: Duration,
    ) -> bool {
        let Some(notification) = self.stack.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if notification.phase() != Phase::Visible {
            return false;
        }

        self.timers.cancel(Timer::AutoDismiss(id));
        notification.set_phase(Phase::Exiting);
        renderer.begin_toast_exit(id);
        self.timers.schedule(
            Timer::Detach(id),
            now + Duration::from_millis(EXIT_TRANSITION_MS),
        );
        true
    }

    /// Runs every timer due at `now` and returns the transitions they caused,
    /// in order.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R, now: Duration) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some((timer, deadline)) = self.timers.pop_due(now) {
            match timer {
                Timer::AutoDismiss(id) => {
                    // Detach timing is based on when the toast was due, so a
                    // late tick catches up instead of stretching the exit.
                    if self.dismiss(id, renderer, deadline) {
                        transitions.push(Transition {
                            id,
                            phase: Phase::Exiting,
                        });
                    }
                }
                Timer::Detach(id) => {
                    if let Some(pos) = self.stack.iter().position(|n| n.id() == id) {
                        self.stack.remove(pos);
                        renderer.remove_toast(id);
                        tracing::debug!(%id, "notification removed");
                        transitions.push(Transition {
                            id,
                            phase: Phase::Removed,
                        });
                    }
                }
            }
        }
        transitions
    }

    /// Attached toasts (visible or exiting), oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.stack.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.stack.iter().find(|n| n.id() == id)
    }

    /// Returns the number of attached toasts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Whether `id` still has an auto-dismiss timer armed.
    #[must_use]
    pub fn auto_dismiss_pending(&self, id: NotificationId) -> bool {
        self.timers.is_pending(Timer::AutoDismiss(id))
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::Document;

    const EXIT: Duration = Duration::from_millis(EXIT_TRANSITION_MS);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup() -> (Manager, I18n, Document) {
        (Manager::new(), I18n::default(), Document::new())
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn show_appends_toast_and_arms_timer() {
        let (mut manager, i18n, mut page) = setup();
        let id = manager.show("Done", Severity::Success, 4000, &i18n, &mut page, ms(0));

        assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Visible));
        assert!(manager.auto_dismiss_pending(id));
        assert_eq!(manager.next_deadline(), Some(ms(4000)));
        assert_eq!(page.toasts().len(), 1);
        assert_eq!(page.toasts()[0].toast.message, "Done");
    }

    #[test]
    fn toast_exits_then_detaches_after_duration() {
        let (mut manager, i18n, mut page) = setup();
        let id = manager.show("Done", Severity::Success, 4000, &i18n, &mut page, ms(0));

        assert!(manager.tick(&mut page, ms(3999)).is_empty());

        let transitions = manager.tick(&mut page, ms(4000));
        assert_eq!(transitions, vec![Transition { id, phase: Phase::Exiting }]);
        assert!(page.toast(id).is_some_and(|node| node.exiting));

        let transitions = manager.tick(&mut page, ms(4000) + EXIT);
        assert_eq!(transitions, vec![Transition { id, phase: Phase::Removed }]);
        assert!(page.toast(id).is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn late_tick_runs_whole_lifecycle() {
        let (mut manager, i18n, mut page) = setup();
        let id = manager.show("Done", Severity::Success, 4000, &i18n, &mut page, ms(0));

        let phases: Vec<Phase> = manager
            .tick(&mut page, ms(10_000))
            .into_iter()
            .map(|t| t.phase)
            .collect();

        assert_eq!(phases, vec![Phase::Exiting, Phase::Removed]);
        assert!(page.toast(id).is_none());
    }

    #[test]
    fn zero_duration_persists_until_dismissed() {
        let (mut manager, i18n, mut page) = setup();
        let id = manager.show("Warn", Severity::Warning, 0, &i18n, &mut page, ms(0));

        assert!(!manager.auto_dismiss_pending(id));
        manager.tick(&mut page, ms(3_600_000));
        assert!(page.toast(id).is_some());

        assert!(manager.dismiss(id, &mut page, ms(3_600_000)));
        manager.tick(&mut page, ms(3_600_000) + EXIT);
        assert!(page.toast(id).is_none());
    }

    #[test]
    fn manual_dismiss_cancels_auto_dismiss() {
        let (mut manager, i18n, mut page) = setup();
        let id = manager.show("Done", Severity::Success, 4000, &i18n, &mut page, ms(0));

        assert!(manager.dismiss(id, &mut page, ms(1000)));
        assert!(!manager.auto_dismiss_pending(id));
        assert_eq!(manager.next_deadline(), Some(ms(1000) + EXIT));

        let transitions = manager.tick(&mut page, ms(5000));
        assert_eq!(transitions, vec![Transition { id, phase: Phase::Removed }]);
    }

    #[test]
    fn dismiss_twice_is_a_no_op() {
        let (mut manager, i18n, mut page) = setup();
        let id = manager.show("Once", Severity::Info, 0, &i18n, &mut page, ms(0));

        assert!(manager.dismiss(id, &mut page, ms(0)));
        assert!(!manager.dismiss(id, &mut page, ms(100)));
        assert_eq!(manager.next_deadline(), Some(EXIT));

        manager.tick(&mut page, EXIT);
        assert!(!manager.dismiss(id, &mut page, ms(1000)));
        assert!(page.toasts().is_empty());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let (mut manager, _, mut page) = setup();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id, &mut page, ms(0)));
    }

    #[test]
    fn stack_keeps_creation_order() {
        let (mut manager, i18n, mut page) = setup();
        for text in ["first", "second", "third"] {
            manager.show(text, Severity::Info, 0, &i18n, &mut page, ms(0));
        }

        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        let rendered: Vec<&str> = page.toasts().iter().map(|n| n.toast.message.as_str()).collect();
        assert_eq!(rendered, messages);
    }
}
