// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event naming, resolved once from host capabilities.
//!
//! Hosts either deliver native pointer events (`pointermove`, …) or only
//! mouse events (`mousemove`, …). The choice is made once at startup with
//! [`EventScheme::resolve`] and the resulting value is handed to whatever
//! registers listeners, so nothing probes the host per event.
//!
//! ```
//! use trellis_dom::scheme::{EventScheme, HostCapabilities, PointerKind};
//!
//! let scheme = EventScheme::resolve(HostCapabilities { pointer_events: false });
//! assert_eq!(scheme, EventScheme::Fallback);
//! assert_eq!(scheme.name(PointerKind::Down), "mousedown");
//! assert_eq!(scheme.classify("mouseup"), Some(PointerKind::Up));
//! assert_eq!(scheme.classify("pointerup"), None);
//! ```

/// Native event for a pointer the host took away mid-gesture.
///
/// Accepted as [`PointerKind::Cancel`] under [`EventScheme::Native`], in
/// addition to the window `blur` both schemes share.
pub const POINTER_CANCEL: &str = "pointercancel";

/// What the host environment supports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether the host delivers native pointer events.
    pub pointer_events: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            pointer_events: true,
        }
    }
}

/// Which family of event names the host speaks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum EventScheme {
    /// `pointermove`, `pointerdown`, `pointerup`, `pointerleave`.
    #[default]
    Native,
    /// `mousemove`, `mousedown`, `mouseup`, `mouseleave`.
    Fallback,
}

/// Pointer interaction kinds, independent of the host's naming.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer moved.
    Move,
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Pointer left an element's bounds.
    Leave,
    /// The host lost the pointer (window blur, pointer cancel).
    Cancel,
}

impl PointerKind {
    /// All kinds, in a stable order.
    pub const ALL: [Self; 5] = [Self::Move, Self::Down, Self::Up, Self::Leave, Self::Cancel];
}

impl EventScheme {
    /// Pick the scheme for a host, preferring native pointer events.
    pub fn resolve(caps: HostCapabilities) -> Self {
        let scheme = if caps.pointer_events {
            Self::Native
        } else {
            Self::Fallback
        };
        tracing::debug!(?scheme, "resolved pointer event scheme");
        scheme
    }

    /// Host event name to listen for.
    ///
    /// [`PointerKind::Cancel`] maps to the window `blur` event in both schemes.
    pub const fn name(self, kind: PointerKind) -> &'static str {
        match (self, kind) {
            (Self::Native, PointerKind::Move) => "pointermove",
            (Self::Native, PointerKind::Down) => "pointerdown",
            (Self::Native, PointerKind::Up) => "pointerup",
            (Self::Native, PointerKind::Leave) => "pointerleave",
            (Self::Fallback, PointerKind::Move) => "mousemove",
            (Self::Fallback, PointerKind::Down) => "mousedown",
            (Self::Fallback, PointerKind::Up) => "mouseup",
            (Self::Fallback, PointerKind::Leave) => "mouseleave",
            (_, PointerKind::Cancel) => "blur",
        }
    }

    /// Translate a host event name into a [`PointerKind`].
    ///
    /// Names from the other scheme are rejected. `pointercancel` is accepted as
    /// [`PointerKind::Cancel`] under [`EventScheme::Native`].
    pub fn classify(self, name: &str) -> Option<PointerKind> {
        if self == Self::Native && name == POINTER_CANCEL {
            return Some(PointerKind::Cancel);
        }
        PointerKind::ALL
            .into_iter()
            .find(|kind| self.name(*kind) == name)
    }
}
