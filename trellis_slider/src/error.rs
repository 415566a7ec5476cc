// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_dom::DomError;

/// Errors from slider construction and document updates.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SliderError {
    /// `min` must be finite and strictly below a finite `max`.
    #[error("invalid slider range: min {min} must be below max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// `step` must be finite and positive.
    #[error("invalid slider step {0}: must be finite and positive")]
    InvalidStep(f64),
    /// The slider's elements were removed from the document behind its back.
    #[error(transparent)]
    Dom(#[from] DomError),
}
