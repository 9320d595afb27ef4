// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-binding configuration: delays and callbacks.

use alloc::boxed::Box;
use core::fmt;

/// Default delay before an enter callback fires, in milliseconds.
pub const DEFAULT_ENTER_TIMEOUT: u64 = 200;

/// Default delay before a leave callback fires, in milliseconds.
pub const DEFAULT_LEAVE_TIMEOUT: u64 = 200;

/// Callback invoked with the target and the configuration it was bound with.
pub type HoverCallback<K> = Box<dyn Fn(&K, &HoverConfig<K>)>;

/// Delays and callbacks for one hover binding.
///
/// Every field is optional: timeouts default to [`DEFAULT_ENTER_TIMEOUT`] and
/// [`DEFAULT_LEAVE_TIMEOUT`], and missing callbacks are no-ops.
///
/// ```
/// use understory_hover_delay::HoverConfig;
///
/// let config = HoverConfig::<u32>::new()
///     .with_enter_timeout(100)
///     .with_leave_timeout(400)
///     .with_on_enter(|menu, _| { let _ = menu; /* open */ });
///
/// assert_eq!(config.enter_timeout, 100);
/// assert_eq!(config.leave_timeout, 400);
/// ```
pub struct HoverConfig<K> {
    /// Delay between a pointer entering a target and `on_enter` firing.
    pub enter_timeout: u64,
    /// Delay between a pointer leaving a target and `on_leave` firing.
    pub leave_timeout: u64,
    before_enter: Option<HoverCallback<K>>,
    on_enter: Option<HoverCallback<K>>,
    on_leave: Option<HoverCallback<K>>,
}

impl<K> Default for HoverConfig<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for HoverConfig<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverConfig")
            .field("enter_timeout", &self.enter_timeout)
            .field("leave_timeout", &self.leave_timeout)
            .field("before_enter", &self.before_enter.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

impl<K> HoverConfig<K> {
    /// Default timeouts and no-op callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enter_timeout: DEFAULT_ENTER_TIMEOUT,
            leave_timeout: DEFAULT_LEAVE_TIMEOUT,
            before_enter: None,
            on_enter: None,
            on_leave: None,
        }
    }

    /// Set the enter delay in milliseconds.
    #[must_use]
    pub fn with_enter_timeout(mut self, timeout: u64) -> Self {
        self.enter_timeout = timeout;
        self
    }

    /// Set the leave delay in milliseconds.
    #[must_use]
    pub fn with_leave_timeout(mut self, timeout: u64) -> Self {
        self.leave_timeout = timeout;
        self
    }

    /// Set both delays at once.
    #[must_use]
    pub fn with_timeouts(self, enter: u64, leave: u64) -> Self {
        self.with_enter_timeout(enter).with_leave_timeout(leave)
    }

    /// Callback run synchronously, without delay, when the pointer enters a
    /// target matched by a selector binding.
    ///
    /// Typically used to close sibling menus before this one opens.
    /// Direct bindings do not call it.
    #[must_use]
    pub fn with_before_enter(mut self, f: impl Fn(&K, &Self) + 'static) -> Self {
        self.before_enter = Some(Box::new(f));
        self
    }

    /// Callback run once the enter delay elapses uninterrupted.
    #[must_use]
    pub fn with_on_enter(mut self, f: impl Fn(&K, &Self) + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Callback run once the leave delay elapses uninterrupted.
    #[must_use]
    pub fn with_on_leave(mut self, f: impl Fn(&K, &Self) + 'static) -> Self {
        self.on_leave = Some(Box::new(f));
        self
    }

    pub(crate) fn run_before_enter(&self, target: &K) {
        if let Some(f) = &self.before_enter {
            f(target, self);
        }
    }

    pub(crate) fn run_on_enter(&self, target: &K) {
        if let Some(f) = &self.on_enter {
            f(target, self);
        }
    }

    pub(crate) fn run_on_leave(&self, target: &K) {
        if let Some(f) = &self.on_leave {
            f(target, self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn defaults_are_two_hundred_ms() {
        let config = HoverConfig::<u32>::default();
        assert_eq!(config.enter_timeout, 200);
        assert_eq!(config.leave_timeout, 200);
    }

    #[test]
    fn missing_callbacks_are_noops() {
        let config = HoverConfig::<u32>::new();
        config.run_before_enter(&1);
        config.run_on_enter(&1);
        config.run_on_leave(&1);
    }

    #[test]
    fn callbacks_receive_target_and_config() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let config = HoverConfig::new()
            .with_timeouts(10, 20)
            .with_on_leave(move |t: &u32, c| log.borrow_mut().push((*t, c.leave_timeout)));

        config.run_on_enter(&5);
        config.run_on_leave(&5);

        assert_eq!(*seen.borrow(), [(5, 20)]);
    }

    #[test]
    fn debug_reports_installed_callbacks() {
        let config = HoverConfig::<u32>::new().with_on_enter(|_, _| {});
        let text = alloc::format!("{config:?}");
        assert!(text.contains("on_enter: true"), "{text}");
        assert!(text.contains("on_leave: false"), "{text}");
    }
}
