// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: which single thumb, if any, is being dragged.
//!
//! One pointer is assumed, so at most one thumb can be active across every
//! slider that shares a session. The session is an explicit value owned by a
//! top-level controller ([`SliderSet`](crate::SliderSet)) rather than process
//! state, so independent controllers and tests never observe each other.
//!
//! ## States
//!
//! - `Idle`: no active thumb.
//! - `Dragging(thumb)`: entered on pointer-down over a hovered thumb.
//!
//! Pointer-move keeps the state; pointer-up or cancel returns to `Idle`.
//! There is no timeout.
//!
//! ```
//! use trellis_slider::session::{DragSession, ThumbRef};
//! use trellis_slider::SliderId;
//!
//! let mut session = DragSession::new();
//! let a = ThumbRef { slider: SliderId(0), thumb: 0 };
//! let b = ThumbRef { slider: SliderId(1), thumb: 0 };
//!
//! assert_eq!(session.begin(a), None);
//! // A second begin replaces the first and hands it back for cleanup.
//! assert_eq!(session.begin(b), Some(a));
//! assert_eq!(session.active(), Some(b));
//! assert_eq!(session.end(), Some(b));
//! assert!(!session.is_dragging());
//! ```

use crate::SliderId;

/// Non-owning handle to a thumb: the slider it belongs to and its index there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbRef {
    /// Owning slider.
    pub slider: SliderId,
    /// Index within the slider's thumbs.
    pub thumb: usize,
}

/// Single-active-drag state machine.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    active: Option<ThumbRef>,
}

impl DragSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Dragging(thumb)`.
    ///
    /// Returns the previously active thumb, if any, so the caller can clear its
    /// styling; the invariant of a single active thumb is kept either way.
    pub fn begin(&mut self, thumb: ThumbRef) -> Option<ThumbRef> {
        let previous = self.active.replace(thumb);
        tracing::debug!(?thumb, ?previous, "drag started");
        previous
    }

    /// Return to `Idle`, handing back the thumb that was active.
    pub fn end(&mut self) -> Option<ThumbRef> {
        let ended = self.active.take();
        if let Some(thumb) = ended {
            tracing::debug!(?thumb, "drag ended");
        }
        ended
    }

    /// End the drag only if it belongs to `slider`.
    pub fn end_for(&mut self, slider: SliderId) -> Option<ThumbRef> {
        if self.active.is_some_and(|t| t.slider == slider) {
            self.end()
        } else {
            None
        }
    }

    /// The thumb being dragged.
    pub fn active(&self) -> Option<ThumbRef> {
        self.active
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(slider: u32, thumb: usize) -> ThumbRef {
        ThumbRef {
            slider: SliderId(slider),
            thumb,
        }
    }

    #[test]
    fn idle_end_is_noop() {
        let mut s = DragSession::new();
        assert_eq!(s.end(), None);
        assert!(!s.is_dragging());
    }

    #[test]
    fn begin_then_end_round_trip() {
        let mut s = DragSession::new();
        assert_eq!(s.begin(r(0, 1)), None);
        assert!(s.is_dragging());
        assert_eq!(s.active(), Some(r(0, 1)));
        assert_eq!(s.end(), Some(r(0, 1)));
        assert_eq!(s.active(), None);
    }

    #[test]
    fn end_for_only_matches_owner() {
        let mut s = DragSession::new();
        s.begin(r(3, 0));
        assert_eq!(s.end_for(SliderId(4)), None);
        assert!(s.is_dragging());
        assert_eq!(s.end_for(SliderId(3)), Some(r(3, 0)));
        assert!(!s.is_dragging());
    }
}
