// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb state: value and interaction markers.

use trellis_dom::ElementId;

use crate::geometry::TrackGeometry;
use crate::range::SliderRange;

/// Class marker put on the hovered thumb.
pub const HOVER_CLASS: &str = "hover";
/// Class marker put on the actively dragged thumb.
pub const ACTIVE_CLASS: &str = "active";

/// `z-index` of the thumb being dragged.
pub(crate) const TOP_LAYER: &str = "2";
/// `z-index` of every other thumb.
pub(crate) const LOWER_LAYER: &str = "1";

bitflags::bitflags! {
    /// Interaction markers carried by a thumb.
    ///
    /// Each flag is mirrored onto the thumb element as a class marker
    /// ([`HOVER_CLASS`], [`ACTIVE_CLASS`]) for stylesheets to key off.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ThumbState: u8 {
        /// Nearest thumb to the pointer; pointer-down will pick it.
        const HOVER  = 0b0000_0001;
        /// Being dragged.
        const ACTIVE = 0b0000_0010;
    }
}

impl ThumbState {
    /// Class marker used for a single flag.
    pub(crate) fn class(self) -> &'static str {
        if self == Self::ACTIVE {
            ACTIVE_CLASS
        } else {
            HOVER_CLASS
        }
    }
}

/// A draggable handle bound to one value of its slider.
///
/// Thumbs are owned by a [`Slider`](crate::Slider), which passes its range
/// in when the value changes. The pixel position is never stored; it is
/// derived from the value and measured geometry.
#[derive(Clone, Debug)]
pub struct Thumb {
    element: ElementId,
    value: Option<f64>,
    state: ThumbState,
}

impl Thumb {
    pub(crate) fn new(element: ElementId) -> Self {
        Self {
            element,
            value: None,
            state: ThumbState::empty(),
        }
    }

    /// Element representing this thumb.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Current value, `None` until first set.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Pixel `left` offset within the track for the current value.
    ///
    /// `None` until a value has been set.
    pub fn left(&self, range: &SliderRange, geometry: &TrackGeometry) -> Option<f64> {
        self.value
            .map(|value| geometry.left_for(range.fraction_of(value)))
    }

    /// Current interaction markers.
    pub fn state(&self) -> ThumbState {
        self.state
    }

    /// Whether the thumb is hovered.
    pub fn is_hovered(&self) -> bool {
        self.state.contains(ThumbState::HOVER)
    }

    /// Whether the thumb is being dragged.
    pub fn is_active(&self) -> bool {
        self.state.contains(ThumbState::ACTIVE)
    }

    /// Clamp and store `value`; returns the stored value if it changed.
    ///
    /// NaN is ignored.
    pub(crate) fn store(&mut self, range: &SliderRange, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let value = range.clamp(value);
        if self.value == Some(value) {
            return None;
        }
        self.value = Some(value);
        Some(value)
    }

    /// Set or clear a marker; returns `true` if it changed.
    pub(crate) fn mark(&mut self, flag: ThumbState, on: bool) -> bool {
        let before = self.state;
        self.state.set(flag, on);
        before != self.state
    }
}
