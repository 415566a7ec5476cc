// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing which thumb the pointer is "over".
//!
//! Hover is what pointer-down acts on, so the policy decides which of several
//! thumbs a press will grab. Two policies are available:
//!
//! - [`HoverPolicy::Nearest`] (default): the thumb whose centre is closest to
//!   the pointer, by absolute distance.
//! - [`HoverPolicy::SignedOffset`]: the legacy score
//!   `pointer_x - thumb_x + thumb_width / 2`, smallest first. The score is signed,
//!   so it is not symmetric around the pointer; keep it only when matching
//!   existing visuals matters.
//!
//! Ties go to the earliest thumb in slider order.
//!
//! ```
//! use trellis_slider::hover::{HoverCandidate, HoverPolicy};
//!
//! let thumbs = [
//!     HoverCandidate { x: 0.0, width: 20.0 },   // centre 10
//!     HoverCandidate { x: 100.0, width: 20.0 }, // centre 110
//! ];
//! assert_eq!(HoverPolicy::Nearest.pick(40.0, &thumbs), Some(0));
//! assert_eq!(HoverPolicy::Nearest.pick(90.0, &thumbs), Some(1));
//! // The signed score always favours the thumb furthest right.
//! assert_eq!(HoverPolicy::SignedOffset.pick(40.0, &thumbs), Some(1));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Horizontal extent of a thumb in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoverCandidate {
    /// Left edge.
    pub x: f64,
    /// Width.
    pub width: f64,
}

/// How the hovered thumb is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum HoverPolicy {
    /// Closest thumb centre by absolute distance.
    #[default]
    Nearest,
    /// Smallest `pointer_x - x + width / 2`.
    SignedOffset,
}

impl HoverPolicy {
    /// Score a candidate; lower wins.
    pub fn score(self, pointer_x: f64, c: &HoverCandidate) -> f64 {
        match self {
            Self::Nearest => (pointer_x - (c.x + c.width / 2.0)).abs(),
            Self::SignedOffset => pointer_x - c.x + c.width / 2.0,
        }
    }

    /// Index of the winning candidate, or `None` if there are none.
    pub fn pick(self, pointer_x: f64, candidates: &[HoverCandidate]) -> Option<usize> {
        candidates
            .iter()
            .map(|c| self.score(pointer_x, c))
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
                Some((_, b)) if b <= s => best,
                _ => Some((i, s)),
            })
            .map(|(i, _)| i)
    }
}
