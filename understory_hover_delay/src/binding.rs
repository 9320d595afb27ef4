// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover bindings: attach delayed hover callbacks to targets or to a selector.
//!
//! [`HoverBindings`] is the registry the host feeds raw pointer transitions into.
//! It supports two kinds of binding:
//!
//! - **Direct** ([`HoverBindings::bind_hover`]): a fixed set of targets known at bind time.
//! - **Selector** ([`HoverBindings::bind_hover_by_selector`]): a selector string that is
//!   matched against each event target when the event is dispatched, through a
//!   [`SelectorMatcher`] supplied by the host. Targets created after binding match as soon
//!   as the host's matcher says they do. Matching enters also run the
//!   [`before_enter`](crate::HoverConfig::with_before_enter) callback immediately.
//!
//! Each binding keeps its own per-target timers, so two bindings covering the same
//! target never cancel each other.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_hover_delay::{HoverBindings, HoverConfig, HoverEvent};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct Node { id: u32, class: &'static str }
//!
//! let closed = Rc::new(RefCell::new(Vec::new()));
//! let log = closed.clone();
//!
//! let mut bindings = HoverBindings::new();
//! let id = bindings
//!     .bind_hover_by_selector(
//!         ".menu",
//!         HoverConfig::new().with_on_leave(move |n: &Node, _| log.borrow_mut().push(n.id)),
//!     )
//!     .unwrap();
//!
//! // The "document": a node matches `.menu` if it carries that class.
//! let doc = |n: &Node, sel: &str| sel.strip_prefix('.') == Some(n.class);
//!
//! // A menu created after binding still matches.
//! let menu = Node { id: 7, class: "menu" };
//! bindings.pointer_enter(&doc, &menu, 0);
//! bindings.pointer_leave(&doc, &menu, 10);
//!
//! assert_eq!(bindings.advance(210), vec![(id, HoverEvent::Leave(menu))]);
//! assert_eq!(*closed.borrow(), [7]);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::config::HoverConfig;
use crate::debounce::{HoverDebouncer, HoverPhase};
use crate::error::BindError;
use crate::hover::HoverEvent;

/// Resolves selectors against the host's element tree at dispatch time.
///
/// Any `Fn(&K, &str) -> bool` closure implements this trait.
pub trait SelectorMatcher<K> {
    /// Returns `true` if `target` currently matches `selector`.
    fn matches(&self, target: &K, selector: &str) -> bool;
}

impl<K, F> SelectorMatcher<K> for F
where
    F: Fn(&K, &str) -> bool,
{
    fn matches(&self, target: &K, selector: &str) -> bool {
        self(target, selector)
    }
}

/// A matcher that matches nothing, for hosts that only use direct bindings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoSelectors;

impl<K> SelectorMatcher<K> for NoSelectors {
    fn matches(&self, _target: &K, _selector: &str) -> bool {
        false
    }
}

/// Handle for a registered binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(u64);

#[derive(Debug)]
enum Scope<K> {
    Targets(HashSet<K>),
    Selector(String),
}

#[derive(Debug)]
struct Binding<K> {
    scope: Scope<K>,
    debouncer: HoverDebouncer<K>,
}

impl<K: Clone + Eq + Hash> Binding<K> {
    fn accepts<M: SelectorMatcher<K> + ?Sized>(&self, matcher: &M, target: &K) -> bool {
        match &self.scope {
            Scope::Targets(targets) => targets.contains(target),
            Scope::Selector(selector) => matcher.matches(target, selector),
        }
    }
}

/// Registry of hover bindings.
#[derive(Debug)]
pub struct HoverBindings<K> {
    bindings: BTreeMap<BindingId, Binding<K>>,
    next_id: u64,
}

impl<K> Default for HoverBindings<K> {
    fn default() -> Self {
        Self {
            bindings: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<K: Clone + Eq + Hash> HoverBindings<K> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind delayed hover callbacks to each of `targets` and hand the collection back.
    ///
    /// Every target is debounced independently. This never fails; use
    /// [`Self::bind_hover_with_id`] if the binding needs to be removed later.
    pub fn bind_hover<C: AsRef<[K]>>(&mut self, targets: C, config: HoverConfig<K>) -> C {
        self.bind_hover_with_id(targets.as_ref(), config);
        targets
    }

    /// Like [`Self::bind_hover`], returning the new binding's handle.
    pub fn bind_hover_with_id(&mut self, targets: &[K], config: HoverConfig<K>) -> BindingId {
        let targets = targets.iter().cloned().collect();
        self.insert(Scope::Targets(targets), config)
    }

    /// Bind delayed hover callbacks to every target matching `selector` at dispatch time.
    ///
    /// Returns [`BindError::EmptySelector`] and registers nothing if `selector`
    /// is empty or only whitespace.
    pub fn bind_hover_by_selector(
        &mut self,
        selector: &str,
        config: HoverConfig<K>,
    ) -> Result<BindingId, BindError> {
        let selector = selector.trim();
        if selector.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", BindError::EmptySelector);
            return Err(BindError::EmptySelector);
        }
        Ok(self.insert(Scope::Selector(selector.into()), config))
    }

    fn insert(&mut self, scope: Scope<K>, config: HoverConfig<K>) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.insert(
            id,
            Binding {
                scope,
                debouncer: HoverDebouncer::new(config),
            },
        );
        id
    }

    /// Remove a binding, dropping its pending timers without running callbacks.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.bindings.remove(&id).is_some()
    }

    /// Returns `true` if `id` is still registered.
    pub fn contains(&self, id: BindingId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Which callback, if any, binding `id` has pending for `target`.
    pub fn pending(&self, id: BindingId, target: &K) -> Option<HoverPhase> {
        self.bindings.get(&id)?.debouncer.pending(target)
    }

    /// The pointer entered `target` at `now`.
    pub fn pointer_enter<M>(&mut self, matcher: &M, target: &K, now: u64)
    where
        M: SelectorMatcher<K> + ?Sized,
    {
        for binding in self.bindings.values_mut() {
            if !binding.accepts(matcher, target) {
                continue;
            }
            if matches!(binding.scope, Scope::Selector(_)) {
                binding.debouncer.config().run_before_enter(target);
            }
            binding.debouncer.pointer_enter(target.clone(), now);
        }
    }

    /// The pointer left `target` at `now`.
    ///
    /// A binding with an enter pending for `target` always sees the leave, even if
    /// `target` no longer matches its selector, so the enter cannot fire late.
    pub fn pointer_leave<M>(&mut self, matcher: &M, target: &K, now: u64)
    where
        M: SelectorMatcher<K> + ?Sized,
    {
        for binding in self.bindings.values_mut() {
            let entering = binding.debouncer.pending(target) == Some(HoverPhase::Enter);
            if entering || binding.accepts(matcher, target) {
                binding.debouncer.pointer_leave(target.clone(), now);
            }
        }
    }

    /// Dispatch a batch of raw transitions that all happened at `now`.
    ///
    /// The output of [`HoverState::update_path`](crate::hover::HoverState::update_path)
    /// can be passed straight in.
    pub fn dispatch<M, I>(&mut self, matcher: &M, events: I, now: u64)
    where
        M: SelectorMatcher<K> + ?Sized,
        I: IntoIterator<Item = HoverEvent<K>>,
    {
        for event in events {
            match event {
                HoverEvent::Enter(target) => self.pointer_enter(matcher, &target, now),
                HoverEvent::Leave(target) => self.pointer_leave(matcher, &target, now),
            }
        }
    }

    /// Earliest pending deadline across all bindings.
    pub fn next_deadline(&self) -> Option<u64> {
        self.bindings
            .values()
            .filter_map(|b| b.debouncer.next_deadline())
            .min()
    }

    /// Fire the earliest timer due at `now` across all bindings.
    ///
    /// Equal deadlines in different bindings fire in binding order.
    pub fn fire_next(&mut self, now: u64) -> Option<(BindingId, HoverEvent<K>)> {
        let (&id, binding) = self
            .bindings
            .iter_mut()
            .filter_map(|(id, b)| {
                let deadline = b.debouncer.next_deadline()?;
                (deadline <= now).then_some((id, b, deadline))
            })
            .min_by_key(|&(_, _, deadline)| deadline)
            .map(|(id, b, _)| (id, b))?;
        let event = binding.debouncer.fire_next(now)?;
        Some((id, event))
    }

    /// Fire every timer due at `now` in deadline order.
    pub fn advance(&mut self, now: u64) -> Vec<(BindingId, HoverEvent<K>)> {
        let mut fired = Vec::new();
        while let Some(entry) = self.fire_next(now) {
            fired.push(entry);
        }
        fired
    }

    /// Cancel `target`'s pending timers in every binding, e.g. after it is removed.
    ///
    /// Returns `true` if anything was pending.
    pub fn forget(&mut self, target: &K) -> bool {
        let mut any = false;
        for binding in self.bindings.values_mut() {
            any |= binding.debouncer.cancel(target).is_some();
        }
        any
    }
}
