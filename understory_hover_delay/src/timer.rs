// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic timer queue: schedule after a delay, cancel by handle, pop expired timers.
//!
//! The queue never reads a clock. Callers pass the current time (in milliseconds, or any
//! other monotonic unit they use consistently) when scheduling and when polling, and arm a
//! single platform timer for [`TimerQueue::next_deadline`] if they need wakeups.
//!
//! ## Minimal example
//!
//! ```
//! use understory_hover_delay::timer::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! let a = queue.schedule(0, 100, "a");
//! let b = queue.schedule(0, 50, "b");
//!
//! assert_eq!(queue.next_deadline(), Some(50));
//! assert_eq!(queue.cancel(b), Some("b"));
//! // Cancelling twice is a no-op.
//! assert_eq!(queue.cancel(b), None);
//!
//! assert!(queue.pop_due(99).is_none());
//! let expired = queue.pop_due(100).unwrap();
//! assert_eq!(expired.id, a);
//! assert_eq!(expired.payload, "a");
//! assert!(queue.is_empty());
//! ```

use alloc::collections::BTreeMap;

/// Opaque handle for a scheduled timer.
///
/// Handles are allocated in increasing order, so timers that share a deadline
/// expire in the order they were scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A timer that reached its deadline and was removed from the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Handle the timer was scheduled under.
    pub id: TimerId,
    /// Deadline the timer was scheduled for.
    pub deadline: u64,
    /// Payload supplied to [`TimerQueue::schedule`].
    pub payload: T,
}

/// Deadline-ordered queue of pending timers.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(u64, TimerId), T>,
    deadlines: BTreeMap<TimerId, u64>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            deadlines: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to expire `delay` after `now`.
    ///
    /// Deadlines saturate at `u64::MAX` rather than wrapping.
    pub fn schedule(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = now.saturating_add(delay);
        self.entries.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already expired, was already cancelled, or
    /// never belonged to this queue.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id)?;
        self.entries.remove(&(deadline, id))
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.deadlines.get(&id).copied()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Remove and return the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Expired<T>> {
        if self.next_deadline()? > now {
            return None;
        }
        let ((deadline, id), payload) = self.entries.pop_first()?;
        self.deadlines.remove(&id);
        Some(Expired {
            id,
            deadline,
            payload,
        })
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancel every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn new_queue_is_empty() {
        let queue = TimerQueue::<u32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn pop_due_respects_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(10, 200, 1);

        assert!(queue.pop_due(209).is_none());
        let expired = queue.pop_due(210).unwrap();
        assert_eq!(expired.deadline, 210);
        assert_eq!(expired.payload, 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_expire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, 100, 'a');
        queue.schedule(50, 50, 'b');
        queue.schedule(100, 0, 'c');

        let mut order = Vec::new();
        while let Some(expired) = queue.pop_due(100) {
            order.push(expired.payload);
        }
        assert_eq!(order, ['a', 'b', 'c']);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(0, 10, ());

        assert_eq!(queue.cancel(id), Some(()));
        assert_eq!(queue.cancel(id), None);
        assert!(queue.pop_due(u64::MAX).is_none());
    }

    #[test]
    fn cancel_after_expiry_is_noop() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(0, 10, 7);
        let other = queue.schedule(0, 20, 8);

        assert_eq!(queue.pop_due(10).map(|e| e.id), Some(id));
        assert_eq!(queue.cancel(id), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.deadline(other), Some(20));
    }

    #[test]
    fn deadline_saturates() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(u64::MAX - 1, 10, ());
        assert_eq!(queue.deadline(id), Some(u64::MAX));
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(0, 1, ());
        queue.schedule(0, 2, ());

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.deadline(id), None);
        assert_eq!(queue.cancel(id), None);
    }
}
