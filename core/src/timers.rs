//! Deferred callbacks over synthetic time.
//!
//! A [`TimerQueue`] owns every pending timer of one component instance. Time
//! only moves when the owner calls [`TimerQueue::pop_due`] or
//! [`TimerQueue::set_now`], so a state machine built on it can be driven
//! deterministically from tests and from a frame loop alike.
//!
//! Each timer records the queue epoch it was scheduled in. [`TimerQueue::cancel_all`]
//! bumps the epoch, so a [`TimerId`] obtained before a reset is stale forever
//! after and [`TimerQueue::is_current`] reports it as such.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    seq: u64,
    epoch: u64,
}

#[derive(Debug)]
struct Scheduled<T> {
    id: TimerId,
    due: Duration,
    payload: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    epoch: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            epoch: 0,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to become due `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerId {
        let id = TimerId {
            seq: self.next_seq,
            epoch: self.epoch,
        };
        self.next_seq += 1;
        self.pending.push(Scheduled {
            id,
            due: self.now.saturating_add(delay),
            payload,
        });
        id
    }

    /// Drop every pending timer and start a new epoch.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.epoch += 1;
    }

    #[must_use]
    pub fn is_current(&self, id: TimerId) -> bool {
        id.epoch == self.epoch
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|timer| timer.due).min()
    }

    /// Remove the earliest timer due at or before `until` and move the clock to
    /// its deadline. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.id.seq))
            .map(|(index, _)| index)?;
        let timer = self.pending.swap_remove(index);
        self.now = self.now.max(timer.due);
        Some((timer.id, timer.payload))
    }

    /// Move the clock forward without firing anything. The clock never goes back.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}
