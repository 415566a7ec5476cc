// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel ↔ fraction mapping over measured track geometry.

use kurbo::Rect;
use trellis_dom::{Document, ElementId};

/// Measured geometry of one thumb on its track, in viewport pixels.
///
/// A thumb's centre travels over `[thumb_width / 2, track_width - thumb_width / 2]`
/// measured from the slider's left edge, so the thumb never overhangs the track.
/// Pointer offsets map linearly onto that travel and back.
///
/// ```
/// use trellis_slider::TrackGeometry;
///
/// let geo = TrackGeometry {
///     origin_x: 100.0,
///     track_x: 100.0,
///     track_width: 300.0,
///     thumb_width: 20.0,
/// };
/// assert_eq!(geo.travel(), 280.0);
/// // Pointer left of the travel clamps to the start.
/// assert_eq!(geo.fraction_at(0.0), 0.0);
/// assert_eq!(geo.fraction_at(250.0), 0.5);
/// assert_eq!(geo.left_for(0.5), 140.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    /// Left edge of the slider's bounding box.
    pub origin_x: f64,
    /// Left edge of the track.
    pub track_x: f64,
    /// Width of the track.
    pub track_width: f64,
    /// Width of the thumb.
    pub thumb_width: f64,
}

impl TrackGeometry {
    /// Read geometry from the document's measured bounds.
    ///
    /// Returns `None` until the host has laid out the control with a track
    /// wider than the thumb: positions cannot be computed before that.
    pub fn measure(
        doc: &Document,
        root: ElementId,
        track: ElementId,
        thumb: ElementId,
    ) -> Option<Self> {
        let root = doc.bounds(root)?;
        let track: Rect = doc.bounds(track)?;
        let thumb = doc.bounds(thumb)?;
        let geo = Self {
            origin_x: root.x0,
            track_x: track.x0,
            track_width: track.width(),
            thumb_width: thumb.width(),
        };
        (geo.travel() > 0.0).then_some(geo)
    }

    /// Distance the thumb can move.
    pub fn travel(&self) -> f64 {
        self.track_width - self.thumb_width
    }

    /// Fraction of the travel under `pointer_x`, clamped to `[0, 1]`.
    ///
    /// Degenerate geometry (no travel) always maps to `0`.
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if self.travel() <= 0.0 {
            return 0.0;
        }
        let half = self.thumb_width / 2.0;
        let offset = (pointer_x - self.origin_x).clamp(half, self.track_width - half);
        (offset - half) / self.travel()
    }

    /// Thumb `left` offset within the track for a fraction of the travel.
    pub fn left_for(&self, fraction: f64) -> f64 {
        fraction * self.travel()
    }

    /// Viewport x of the thumb's left edge for a fraction of the travel.
    pub fn thumb_x(&self, fraction: f64) -> f64 {
        self.track_x + self.left_for(fraction)
    }
}
