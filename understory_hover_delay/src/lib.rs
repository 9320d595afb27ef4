// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hover Delay: flicker-free delayed hover callbacks for UI.
//!
//! Menus and tooltips that open on hover tend to flicker when the pointer skims across
//! their edge. This crate delays the "enter" and "leave" callbacks by a configurable
//! timeout and applies **mutual cancellation**: entering a target cancels its pending
//! leave, and leaving cancels its pending enter. However quickly the pointer crosses the
//! boundary, only the last transition fires, once, after a full quiet period.
//!
//! - [`timer`]: host-agnostic timer queue (schedule, cancel, pop expired).
//! - [`debounce`]: [`HoverDebouncer`], the per-target mutual-cancellation state machine.
//! - [`binding`]: [`HoverBindings`], direct bindings to known targets and selector
//!   bindings resolved at dispatch time.
//! - [`hover`]: [`HoverState`](hover::HoverState), which turns root→target paths into
//!   raw enter/leave transitions.
//!
//! The crate does not read a clock, arm platform timers, or match selectors itself.
//! Hosts pass the current time in milliseconds to every call, use
//! [`HoverBindings::next_deadline`] to schedule their own wakeup, and supply a
//! [`SelectorMatcher`] that answers "does this element match this selector right now?".
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_hover_delay::{HoverBindings, HoverConfig, HoverEvent, NoSelectors};
//!
//! let open = Rc::new(Cell::new(false));
//! let (on_enter, on_leave) = (open.clone(), open.clone());
//!
//! let mut bindings = HoverBindings::new();
//! let menus = bindings.bind_hover(
//!     vec!["file", "edit"],
//!     HoverConfig::new()
//!         .with_timeouts(100, 400)
//!         .with_on_enter(move |_, _| on_enter.set(true))
//!         .with_on_leave(move |_, _| on_leave.set(false)),
//! );
//! assert_eq!(menus, ["file", "edit"]);
//!
//! // The pointer skims out of "file" and straight back in.
//! bindings.pointer_enter(&NoSelectors, &"file", 0);
//! bindings.pointer_leave(&NoSelectors, &"file", 50);
//! bindings.pointer_enter(&NoSelectors, &"file", 80);
//!
//! assert_eq!(bindings.next_deadline(), Some(180));
//! let fired = bindings.advance(1_000);
//! assert_eq!(fired.len(), 1);
//! assert_eq!(fired[0].1, HoverEvent::Enter("file"));
//! assert!(open.get());
//! ```
//!
//! ## Features
//!
//! - `tracing`: report rejected bindings and timer activity through the `tracing` crate.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod binding;
pub mod config;
pub mod debounce;
pub mod error;
pub mod hover;
pub mod timer;

pub use binding::{BindingId, HoverBindings, NoSelectors, SelectorMatcher};
pub use config::{DEFAULT_ENTER_TIMEOUT, DEFAULT_LEAVE_TIMEOUT, HoverCallback, HoverConfig};
pub use debounce::{HoverDebouncer, HoverPhase};
pub use error::BindError;
pub use hover::HoverEvent;
