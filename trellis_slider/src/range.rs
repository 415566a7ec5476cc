// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated numeric range and step snapping.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::SliderError;

/// Bounds and granularity of a slider, validated once at construction.
///
/// ```
/// use trellis_slider::SliderRange;
///
/// let range = SliderRange::new(0.0, 10.0, 2.0).unwrap();
/// assert_eq!(range.clamp(12.0), 10.0);
/// // Halfway between steps rounds up: 2.5 steps → 3 steps → 6.
/// assert_eq!(range.snap_fraction(0.5), 6.0);
/// assert!(SliderRange::new(5.0, 5.0, 1.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderRange {
    /// Validate and build a range.
    ///
    /// Rejects non-finite bounds, `max <= min`, and non-finite or non-positive `step`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SliderError> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(SliderError::InvalidRange { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SliderError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Granularity.
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Width of the range, `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    pub fn fraction_of(&self, value: f64) -> f64 {
        ((self.clamp(value) - self.min) / self.span()).clamp(0.0, 1.0)
    }

    /// Map a fraction of the travel to the nearest step-aligned value.
    ///
    /// The result is `min + round(fraction * span / step) * step`, with
    /// halves rounded towards positive infinity, then clamped into the range
    /// (the last step may overshoot `max` when the span is not a multiple of it).
    pub fn snap_fraction(&self, fraction: f64) -> f64 {
        let steps = round_half_up(fraction * self.span() / self.step);
        self.clamp(self.min + steps * self.step)
    }
}

/// Round to the nearest integer, ties towards positive infinity.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
