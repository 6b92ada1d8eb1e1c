// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::{palette, Rgb};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Printed as `notif-<unix millis>-<sequence>`. The timestamp keeps ids
/// readable in page markup; the sequence keeps two toasts created in the same
/// millisecond apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId {
    created_ms: i64,
    seq: u64,
}

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self {
            created_ms: chrono::Utc::now().timestamp_millis(),
            seq: COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Wall-clock creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn created_ms(&self) -> i64 {
        self.created_ms
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notif-{}-{}", self.created_ms, self.seq)
    }
}

/// The string was not a printed [`NotificationId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNotificationId(pub String);

impl fmt::Display for InvalidNotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid notification id: {}", self.0)
    }
}

impl std::error::Error for InvalidNotificationId {}

impl FromStr for NotificationId {
    type Err = InvalidNotificationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidNotificationId(s.to_string());
        let rest = s.strip_prefix("notif-").ok_or_else(invalid)?;
        let (created, seq) = rest.rsplit_once('-').ok_or_else(invalid)?;
        Ok(Self {
            created_ms: created.parse().map_err(|_| invalid())?,
            seq: seq.parse().map_err(|_| invalid())?,
        })
    }
}

/// Severity level determines visual styling and the toast title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
    /// Worth a look, nothing failed (amber).
    Warning,
    /// Neutral information (blue). Also the fallback for unknown names.
    #[default]
    Info,
}

/// Fixed presentation attached to a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Bootstrap Icons class name.
    pub icon: &'static str,
    /// Accent color (left border, shadow).
    pub accent: Rgb,
    /// End color of the background gradient.
    pub accent_dark: Rgb,
    /// Catalog key of the toast title.
    pub title_key: &'static str,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name. Unrecognized names map to [`Severity::Info`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => {
                tracing::debug!(severity = other, "unknown severity, using info");
                Severity::Info
            }
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    #[must_use]
    pub fn style(&self) -> SeverityStyle {
        match self {
            Severity::Success => SeverityStyle {
                icon: "bi-check-circle-fill",
                accent: palette::SUCCESS_500,
                accent_dark: palette::SUCCESS_600,
                title_key: "notif.success",
            },
            Severity::Error => SeverityStyle {
                icon: "bi-exclamation-circle-fill",
                accent: palette::ERROR_500,
                accent_dark: palette::ERROR_600,
                title_key: "notif.error",
            },
            Severity::Warning => SeverityStyle {
                icon: "bi-exclamation-triangle-fill",
                accent: palette::WARNING_500,
                accent_dark: palette::WARNING_600,
                title_key: "notif.warning",
            },
            Severity::Info => SeverityStyle {
                icon: "bi-info-circle-fill",
                accent: palette::INFO_500,
                accent_dark: palette::INFO_600,
                title_key: "notif.info",
            },
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.style().accent
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a toast.
///
/// `Created → Visible → Exiting → Removed`. A removed notification is no
/// longer held by the manager, so `Removed` only shows up in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Visible,
    Exiting,
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Message body, already localized by the caller.
    message: String,
    /// Auto-dismiss delay; `None` keeps the toast until dismissed.
    lifetime: Option<Duration>,
    phase: Phase,
}

impl Notification {
    /// Creates a notification that persists until dismissed.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            lifetime: None,
            phase: Phase::Created,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets the auto-dismiss delay from milliseconds. Zero or negative values
    /// keep the toast until it is dismissed manually.
    #[must_use]
    pub fn auto_dismiss_ms(mut self, duration_ms: i64) -> Self {
        self.lifetime = u64::try_from(duration_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        self.lifetime
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
