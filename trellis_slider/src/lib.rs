// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Slider: a horizontal slider with any number of draggable thumbs.
//!
//! ## Overview
//!
//! A [`Slider`] maps a numeric [`SliderRange`] onto a track. Each [`Thumb`]
//! holds one value; its pixel position is derived from the value and the
//! [`TrackGeometry`] the host measured, never stored.
//!
//! Interaction is three steps:
//!
//! - Hover: on pointer-move the [`HoverPolicy`](hover::HoverPolicy) picks the
//!   thumb a press would grab and marks it with [`HOVER_CLASS`].
//! - Press: pointer-down activates the hovered thumb ([`ACTIVE_CLASS`]), raises
//!   it above its siblings, and moves it to the pointer.
//! - Drag: pointer-move anywhere updates the active thumb until pointer-up.
//!
//! Pointer offsets snap to the range's step, halves rounding up, and every
//! value is clamped into `[min, max]`. User-driven changes dispatch an `input`
//! event on the slider root; programmatic ones do not.
//!
//! ## Coordination
//!
//! A [`SliderSet`] owns sliders and the [`DragSession`](session::DragSession)
//! they share, so at most one thumb is dragged at a time and hover freezes
//! while it is. Hosts register the listeners from [`SliderSet::bindings`] and
//! feed every event to [`SliderSet::handle`].
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_dom::Document;
//! use trellis_dom::scheme::{EventScheme, HostCapabilities, PointerKind};
//! use trellis_slider::{PointerEvent, Slider, SliderConfig, SliderRange, SliderSet, Trigger};
//!
//! let mut doc = Document::new();
//! let mut set = SliderSet::new(EventScheme::resolve(HostCapabilities::default()));
//!
//! let range = SliderRange::new(0.0, 10.0, 1.0).unwrap();
//! let mut slider = Slider::new(&mut doc, "span", range, SliderConfig::default().thumbs(2)).unwrap();
//! let bar = Rect::new(0.0, 0.0, 300.0, 20.0);
//! doc.set_bounds(slider.root(), bar).unwrap();
//! doc.set_bounds(slider.track(), bar).unwrap();
//! for thumb in slider.thumbs() {
//!     doc.set_bounds(thumb.element(), Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
//! }
//! slider.set_value(&mut doc, 0, 2.0, Trigger::Programmatic).unwrap();
//! slider.set_value(&mut doc, 1, 8.0, Trigger::Programmatic).unwrap();
//! let id = set.insert(slider);
//!
//! // Grab the upper thumb and pull it to the end of the track.
//! for (kind, x) in [
//!     (PointerKind::Move, 234.0),
//!     (PointerKind::Down, 234.0),
//!     (PointerKind::Move, 400.0),
//!     (PointerKind::Up, 400.0),
//! ] {
//!     set.handle(&mut doc, &PointerEvent::new(kind, (x, 10.0)).over(id)).unwrap();
//! }
//! let values: Vec<_> = set.get(id).unwrap().values().collect();
//! assert_eq!(values, [Some(2.0), Some(10.0)]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hover;
pub mod session;

mod error;
mod geometry;
mod range;
mod set;
mod slider;
mod thumb;

pub use error::SliderError;
pub use geometry::TrackGeometry;
pub use range::SliderRange;
pub use set::{Effect, PointerEvent, SliderId, SliderSet};
pub use slider::{
    Binding, SLIDER_CLASS, Scope, Slider, SliderConfig, THUMB_CLASS, TRACK_CLASS, Trigger,
    VALUE_CLASS,
};
pub use thumb::{ACTIVE_CLASS, HOVER_CLASS, Thumb, ThumbState};
