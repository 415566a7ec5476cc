// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events, listener outcomes, and the propagation walk.
//!
//! Dispatch is synchronous: [`Document::dispatch`](crate::Document::dispatch)
//! builds the target → root path, then walks it with [`run`], invoking every
//! listener registered for the event type on each element in turn.
//!
//! - [`Outcome`] only controls propagation (`Continue` vs `Stop`).
//! - `Stop` aborts immediately: remaining listeners on the same element and
//!   every ancestor are skipped, like `stopImmediatePropagation`.
//! - There is no capture phase; the only consumer in this workspace is the
//!   slider's `input` notification, which bubbles.
//!
//! ```
//! use trellis_dom::event::{run, Outcome};
//!
//! let path = [1_u32, 2, 3];
//! let mut seen = Vec::new();
//! let stopped = run(&path, &mut seen, |node, seen| {
//!     seen.push(*node);
//!     if *node == 2 { Outcome::Stop } else { Outcome::Continue }
//! });
//! assert_eq!(stopped, Some(&2));
//! assert_eq!(seen, vec![1, 2]);
//! ```

use crate::types::{ElementId, Str};

/// Event type dispatched when a form-like control changes value through user input.
pub const INPUT: &str = "input";

/// Propagation outcome returned by a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Keep propagating.
    #[default]
    Continue,
    /// Stop propagation immediately.
    Stop,
}

/// Handle returned by [`Document::add_listener`](crate::Document::add_listener).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Payload carried by an [`Event`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum EventDetail {
    /// No payload.
    #[default]
    None,
    /// A value change on an indexed part of a control (for example a slider thumb).
    Value {
        /// Index of the part that changed.
        index: usize,
        /// New value.
        value: f64,
    },
}

/// An event travelling from its target towards the root.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Event type, matched against listener registrations.
    pub event_type: Str,
    /// Element the event was dispatched on.
    pub target: ElementId,
    /// Element whose listeners are currently running.
    pub current_target: ElementId,
    /// Payload.
    pub detail: EventDetail,
}

impl Event {
    /// Create an event of `event_type` aimed at `target`.
    pub fn new(event_type: impl Into<Str>, target: ElementId) -> Self {
        Self {
            event_type: event_type.into(),
            target,
            current_target: target,
            detail: EventDetail::None,
        }
    }

    /// Create an [`INPUT`] event reporting that part `index` now holds `value`.
    pub fn input(target: ElementId, index: usize, value: f64) -> Self {
        Self::new(INPUT, target).with_detail(EventDetail::Value { index, value })
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_detail(mut self, detail: EventDetail) -> Self {
        self.detail = detail;
        self
    }
}

/// Walk `path` in order, calling `handler` for each entry, and honor [`Outcome::Stop`].
///
/// Returns `None` if the whole path was visited, or the entry at which a
/// handler stopped propagation.
pub fn run<'a, K, E>(
    path: &'a [K],
    event: &mut E,
    mut handler: impl FnMut(&K, &mut E) -> Outcome,
) -> Option<&'a K> {
    for node in path {
        match handler(node, event) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(node),
        }
    }
    None
}
