// SPDX-License-Identifier: MPL-2.0
//! Deferred work keyed by task identity.
//!
//! Every deferral in the crate (the initial page localization pass, toast
//! auto-dismiss, the detach step after a toast's exit transition) is a task in
//! a [`Scheduler`]. A task is addressed by its key, so it can be cancelled
//! explicitly instead of firing later and discovering there is nothing to do.
//!
//! Time is measured as a [`Duration`] since a [`Clock`]'s origin, which lets
//! tests drive the scheduler with a [`ManualClock`].

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Deadline-ordered set of tasks, at most one per key.
#[derive(Debug)]
pub struct Scheduler<K> {
    queue: BTreeMap<(Duration, u64), K>,
    pending: HashMap<K, (Duration, u64)>,
    next_seq: u64,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            pending: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> Scheduler<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `deadline`, replacing any pending task with
    /// the same key. Tasks sharing a deadline fire in scheduling order.
    pub fn schedule(&mut self, key: K, deadline: Duration) {
        self.cancel(key);
        let slot = (deadline, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(slot, key);
        self.pending.insert(key, slot);
    }

    /// Cancels the pending task for `key`. Returns `false` if none was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        match self.pending.remove(&key) {
            Some(slot) => {
                self.queue.remove(&slot);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    /// Deadline of the pending task for `key`.
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<Duration> {
        self.pending.get(&key).map(|(deadline, _)| *deadline)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns the earliest task due at `now`, with its deadline.
    ///
    /// Callers loop on this so tasks scheduled while handling a task are seen
    /// in the same pass when they are already due.
    pub fn pop_due(&mut self, now: Duration) -> Option<(K, Duration)> {
        let (&slot, _) = self.queue.iter().next()?;
        if slot.0 > now {
            return None;
        }
        let key = self.queue.remove(&slot)?;
        self.pending.remove(&key);
        Some((key, slot.0))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
