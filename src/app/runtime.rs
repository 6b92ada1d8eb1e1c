// SPDX-License-Identifier: MPL-2.0
//! Async driver for hosts built on tokio.
//!
//! The shell is single-threaded; the driver just sleeps until the next
//! deadline and ticks. Run it on a current-thread runtime or a `LocalSet`.

use super::persistence::PreferenceStore;
use super::Shell;
use crate::scheduler::Clock;
use crate::ui::renderer::Renderer;
use std::time::Duration;
use tokio::time::Instant;

/// Clock backed by [`tokio::time::Instant`], so it follows paused or
/// auto-advanced test time.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Ticks `shell` at each deadline until no deferred work is left.
///
/// Toasts without a lifetime do not keep the driver alive; they stay on the
/// page until removed.
pub async fn run_until_idle<R, P, C>(shell: &mut Shell<R, P, C>)
where
    R: Renderer,
    P: PreferenceStore,
    C: Clock,
{
    loop {
        shell.tick();
        let Some(deadline) = shell.next_deadline() else {
            break;
        };
        let wait = deadline.saturating_sub(shell.clock().now());
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }
}
