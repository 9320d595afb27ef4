// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delayed hover callbacks with mutual cancellation.
//!
//! [`HoverDebouncer`] holds at most one pending timer per target. Entering a target
//! cancels its pending leave (or a previous enter) before scheduling an enter timer,
//! and leaving cancels its pending enter (or a previous leave) before scheduling a
//! leave timer. A fast enter → leave → enter sequence therefore collapses into a
//! single `on_enter`, and the menu under the pointer never flickers.
//!
//! ## Usage
//!
//! 1) Forward raw pointer transitions with [`HoverDebouncer::pointer_enter`] and
//!    [`HoverDebouncer::pointer_leave`], passing the current time.
//! 2) Whenever time passes, call [`HoverDebouncer::advance`]. Due callbacks run in
//!    deadline order and the fired transitions are returned.
//! 3) Use [`HoverDebouncer::next_deadline`] to arm a single host timer.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_hover_delay::{HoverConfig, HoverDebouncer, HoverEvent};
//!
//! let opened = Rc::new(RefCell::new(Vec::new()));
//! let log = opened.clone();
//! let mut hover = HoverDebouncer::new(
//!     HoverConfig::new().with_on_enter(move |menu: &&'static str, _| log.borrow_mut().push(*menu)),
//! );
//!
//! hover.pointer_enter("file", 0);
//! hover.pointer_leave("file", 50); // cancels the pending enter
//! hover.pointer_enter("file", 80); // cancels the pending leave
//!
//! assert!(hover.advance(279).is_empty());
//! assert_eq!(hover.advance(280), vec![HoverEvent::Enter("file")]);
//! assert_eq!(*opened.borrow(), ["file"]);
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::config::HoverConfig;
use crate::hover::HoverEvent;
use crate::timer::{TimerId, TimerQueue};

/// Which delayed callback is pending for a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverPhase {
    /// `on_enter` will fire when the timer expires.
    Enter,
    /// `on_leave` will fire when the timer expires.
    Leave,
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    phase: HoverPhase,
    timer: TimerId,
}

/// Debounces pointer enter/leave transitions per target.
#[derive(Debug)]
pub struct HoverDebouncer<K> {
    config: HoverConfig<K>,
    timers: TimerQueue<(K, HoverPhase)>,
    pending: HashMap<K, Pending>,
}

impl<K: Clone + Eq + Hash> HoverDebouncer<K> {
    /// Create a debouncer with no pending timers.
    pub fn new(config: HoverConfig<K>) -> Self {
        Self {
            config,
            timers: TimerQueue::new(),
            pending: HashMap::new(),
        }
    }

    /// The configuration this debouncer was created with.
    pub fn config(&self) -> &HoverConfig<K> {
        &self.config
    }

    /// The pointer entered `target` at `now`.
    pub fn pointer_enter(&mut self, target: K, now: u64) {
        let delay = self.config.enter_timeout;
        self.schedule(target, HoverPhase::Enter, delay, now);
    }

    /// The pointer left `target` at `now`.
    pub fn pointer_leave(&mut self, target: K, now: u64) {
        let delay = self.config.leave_timeout;
        self.schedule(target, HoverPhase::Leave, delay, now);
    }

    /// Forward a raw transition to [`Self::pointer_enter`] or [`Self::pointer_leave`].
    pub fn handle(&mut self, event: HoverEvent<K>, now: u64) {
        match event {
            HoverEvent::Enter(target) => self.pointer_enter(target, now),
            HoverEvent::Leave(target) => self.pointer_leave(target, now),
        }
    }

    fn schedule(&mut self, target: K, phase: HoverPhase, delay: u64, now: u64) {
        // Retire whatever is pending for this target before arming the new timer.
        if let Some(prev) = self.pending.remove(&target) {
            self.timers.cancel(prev.timer);
            #[cfg(feature = "tracing")]
            tracing::trace!(cancelled = ?prev.phase, replaced_by = ?phase, "hover timer cancelled");
        }
        let timer = self.timers.schedule(now, delay, (target.clone(), phase));
        self.pending.insert(target, Pending { phase, timer });
        #[cfg(feature = "tracing")]
        tracing::trace!(?phase, deadline = now.saturating_add(delay), "hover timer scheduled");
    }

    /// Which callback, if any, is pending for `target`.
    pub fn pending(&self, target: &K) -> Option<HoverPhase> {
        self.pending.get(target).map(|p| p.phase)
    }

    /// Deadline of the pending timer for `target`.
    pub fn pending_deadline(&self, target: &K) -> Option<u64> {
        self.pending
            .get(target)
            .and_then(|p| self.timers.deadline(p.timer))
    }

    /// Earliest deadline across all targets.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns `true` if no timers are pending.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Fire the earliest timer due at `now`, if any, and run its callback.
    pub fn fire_next(&mut self, now: u64) -> Option<HoverEvent<K>> {
        let expired = self.timers.pop_due(now)?;
        let (target, phase) = expired.payload;
        if self
            .pending
            .get(&target)
            .is_some_and(|p| p.timer == expired.id)
        {
            self.pending.remove(&target);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(?phase, deadline = expired.deadline, "hover timer fired");
        Some(match phase {
            HoverPhase::Enter => {
                self.config.run_on_enter(&target);
                HoverEvent::Enter(target)
            }
            HoverPhase::Leave => {
                self.config.run_on_leave(&target);
                HoverEvent::Leave(target)
            }
        })
    }

    /// Fire every timer due at `now` in deadline order.
    pub fn advance(&mut self, now: u64) -> Vec<HoverEvent<K>> {
        let mut fired = Vec::new();
        while let Some(event) = self.fire_next(now) {
            fired.push(event);
        }
        fired
    }

    /// Drop the pending timer for `target` without running its callback.
    ///
    /// Returns the phase that was pending. Cancelling an idle target is a no-op.
    pub fn cancel(&mut self, target: &K) -> Option<HoverPhase> {
        let prev = self.pending.remove(target)?;
        self.timers.cancel(prev.timer);
        Some(prev.phase)
    }

    /// Drop every pending timer without running callbacks.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.timers.clear();
    }
}
