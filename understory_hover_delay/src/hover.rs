// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover path tracking: turn root→target paths into enter/leave events.
//!
//! Feed [`HoverState::update_path`] the path under the pointer each time it changes
//! (for example from a responder's dispatch sequence). It returns the raw transitions
//! that the delayed bindings in [`crate::binding`] consume.
//!
//! ```
//! use understory_hover_delay::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(
//!     hover.update_path(&[1, 2, 3]),
//!     vec![HoverEvent::Enter(1), HoverEvent::Enter(2), HoverEvent::Enter(3)]
//! );
//!
//! // Move to a sibling of 3.
//! assert_eq!(
//!     hover.update_path(&[1, 2, 4]),
//!     vec![HoverEvent::Leave(3), HoverEvent::Enter(4)]
//! );
//! ```

use alloc::vec::Vec;

/// A hover transition for one node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverEvent<K> {
    /// The pointer entered the node.
    Enter(K),
    /// The pointer left the node.
    Leave(K),
}

impl<K> HoverEvent<K> {
    /// The node this transition applies to.
    pub fn target(&self) -> &K {
        match self {
            Self::Enter(k) | Self::Leave(k) => k,
        }
    }

    /// Returns `true` for [`HoverEvent::Enter`].
    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Enter(_))
    }
}

/// Tracks the currently hovered root→target path.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    current: Vec<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HoverState<K> {
    /// Nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The hovered path, root first.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// The innermost hovered node.
    pub fn current_target(&self) -> Option<&K> {
        self.current.last()
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Replace the hovered path and return the resulting transitions.
    ///
    /// Leaves come first, innermost to outermost, followed by enters from
    /// outermost to innermost. Nodes shared by the old and new path prefix
    /// produce nothing.
    pub fn update_path(&mut self, path: &[K]) -> Vec<HoverEvent<K>> {
        let common = self
            .current
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut events = Vec::with_capacity(self.current.len() - common + path.len() - common);
        events.extend(
            self.current[common..]
                .iter()
                .rev()
                .cloned()
                .map(HoverEvent::Leave),
        );
        events.extend(path[common..].iter().cloned().map(HoverEvent::Enter));

        self.current.clear();
        self.current.extend_from_slice(path);
        events
    }

    /// Leave every hovered node, e.g. when the pointer exits the window.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update_path(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn unchanged_path_emits_nothing() {
        let mut hover = HoverState::new();
        hover.update_path(&[1, 2]);
        assert!(hover.update_path(&[1, 2]).is_empty());
    }

    #[test]
    fn moving_up_leaves_inner_nodes() {
        let mut hover = HoverState::new();
        hover.update_path(&[1, 2, 3]);

        assert_eq!(
            hover.update_path(&[1]),
            vec![HoverEvent::Leave(3), HoverEvent::Leave(2)]
        );
        assert_eq!(hover.current_target(), Some(&1));
    }

    #[test]
    fn disjoint_paths_leave_then_enter() {
        let mut hover = HoverState::new();
        hover.update_path(&[1, 2]);

        assert_eq!(
            hover.update_path(&[5, 6]),
            vec![
                HoverEvent::Leave(2),
                HoverEvent::Leave(1),
                HoverEvent::Enter(5),
                HoverEvent::Enter(6),
            ]
        );
    }

    #[test]
    fn clear_leaves_everything() {
        let mut hover = HoverState::new();
        hover.update_path(&['a', 'b']);

        assert_eq!(
            hover.clear(),
            vec![HoverEvent::Leave('b'), HoverEvent::Leave('a')]
        );
        assert!(hover.current_path().is_empty());
        assert!(hover.clear().is_empty());
    }

    #[test]
    fn event_accessors() {
        assert_eq!(HoverEvent::Enter(3).target(), &3);
        assert!(HoverEvent::Enter(3).is_enter());
        assert!(!HoverEvent::Leave(3).is_enter());
    }
}
