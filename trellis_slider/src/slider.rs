// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider control: element tree, value changes, hover, and activation.

use alloc::{format, vec::Vec};

use smallvec::SmallVec;
use trellis_dom::event::Event;
use trellis_dom::scheme::{EventScheme, POINTER_CANCEL, PointerKind};
use trellis_dom::{Document, ElementId, Str};

use crate::error::SliderError;
use crate::geometry::TrackGeometry;
use crate::hover::{HoverCandidate, HoverPolicy};
use crate::range::SliderRange;
use crate::thumb::{ACTIVE_CLASS, HOVER_CLASS, LOWER_LAYER, TOP_LAYER, Thumb, ThumbState};

/// Class marker on the slider's root element.
pub const SLIDER_CLASS: &str = "trellis-slider";
/// Class marker on the track element.
pub const TRACK_CLASS: &str = "trellis-slider-track";
/// Class marker on each thumb element.
pub const THUMB_CLASS: &str = "trellis-slider-thumb";
/// Class marker on the value readout.
pub const VALUE_CLASS: &str = "trellis-slider-value";

/// Who caused a value change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Direct user interaction; an `input` event is dispatched on the slider.
    User,
    /// Set by code; no event.
    Programmatic,
}

/// Construction options for a [`Slider`].
///
/// `attributes` and `style` are forwarded to the root element as-is.
#[derive(Clone, Debug)]
pub struct SliderConfig {
    /// Attributes for the root element.
    pub attributes: Vec<(Str, Str)>,
    /// Inline styles for the root element.
    pub style: Vec<(Str, Str)>,
    /// A disabled slider never activates a thumb.
    pub disabled: bool,
    /// How pointer-down picks among several thumbs.
    pub hover_policy: HoverPolicy,
    /// Thumbs created up front.
    pub thumbs: usize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            attributes: Vec::new(),
            style: Vec::new(),
            disabled: false,
            hover_policy: HoverPolicy::default(),
            thumbs: 1,
        }
    }
}

impl SliderConfig {
    /// Add a root attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<Str>, value: impl Into<Str>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a root inline style.
    #[must_use]
    pub fn style(mut self, property: impl Into<Str>, value: impl Into<Str>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Start disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Choose the hover policy.
    #[must_use]
    pub fn hover_policy(mut self, policy: HoverPolicy) -> Self {
        self.hover_policy = policy;
        self
    }

    /// Number of thumbs to create.
    #[must_use]
    pub fn thumbs(mut self, count: usize) -> Self {
        self.thumbs = count;
        self
    }
}

/// Where a host should attach a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// On the slider's track element.
    Track,
    /// On the window, so drags keep tracking outside the track.
    Window,
}

/// One listener a host should register for a slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Where to listen.
    pub scope: Scope,
    /// Interaction kind the listener feeds.
    pub kind: PointerKind,
    /// Host event name, from the resolved [`EventScheme`].
    pub event: &'static str,
}

/// A horizontal slider with one or more thumbs.
///
/// The slider owns its elements in a [`Document`]:
///
/// ```text
/// div.trellis-slider            (root; attributes and style from the config)
/// ├── div.trellis-slider-track
/// │   └── div.trellis-slider-thumb *
/// └── span.trellis-slider-value (readout, single-thumb sliders only)
/// ```
///
/// Positions need measured geometry. Until the host reports bounds for the
/// root, track, and thumbs, values are stored but no `left` style is written;
/// hosts call [`Slider::sync_positions`] after each layout pass to catch up.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use trellis_dom::Document;
/// use trellis_slider::{Slider, SliderConfig, SliderRange, Trigger};
///
/// let mut doc = Document::new();
/// let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
/// let mut slider = Slider::new(&mut doc, "volume", range, SliderConfig::default()).unwrap();
///
/// // The host lays the control out.
/// doc.set_bounds(slider.root(), Rect::new(0.0, 0.0, 300.0, 20.0)).unwrap();
/// doc.set_bounds(slider.track(), Rect::new(0.0, 0.0, 300.0, 20.0)).unwrap();
/// let thumb = slider.thumbs()[0].element();
/// doc.set_bounds(thumb, Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
///
/// assert!(slider.set_value(&mut doc, 0, 50.0, Trigger::Programmatic).unwrap());
/// assert_eq!(doc.style(thumb, "left"), Some("140px"));
/// assert_eq!(doc.text_of(slider.readout()), Some("50"));
/// ```
#[derive(Clone, Debug)]
pub struct Slider {
    name: Str,
    range: SliderRange,
    root: ElementId,
    track: ElementId,
    readout: ElementId,
    thumbs: SmallVec<[Thumb; 2]>,
    disabled: bool,
    hover_policy: HoverPolicy,
}

impl Slider {
    /// Build the slider's elements in `doc`.
    ///
    /// The root is detached; append it wherever it belongs.
    pub fn new(
        doc: &mut Document,
        name: impl Into<Str>,
        range: SliderRange,
        config: SliderConfig,
    ) -> Result<Self, SliderError> {
        let name = name.into();
        let root = doc.create_with("div", config.attributes, config.style);
        doc.set_attribute(root, "name", name.clone())?;
        doc.add_class(root, SLIDER_CLASS)?;
        if config.disabled {
            doc.set_attribute(root, "disabled", "")?;
        }
        let track = doc.create("div");
        doc.add_class(track, TRACK_CLASS)?;
        doc.append(root, track)?;
        let readout = doc.create("span");
        doc.add_class(readout, VALUE_CLASS)?;
        doc.append(root, readout)?;

        let mut slider = Self {
            name,
            range,
            root,
            track,
            readout,
            thumbs: SmallVec::new(),
            disabled: config.disabled,
            hover_policy: config.hover_policy,
        };
        for _ in 0..config.thumbs {
            slider.add_thumb(doc)?;
        }
        Ok(slider)
    }

    /// Append a new thumb with no value yet; returns its index.
    ///
    /// The readout only tracks single-thumb sliders, so adding a second thumb
    /// clears it.
    pub fn add_thumb(&mut self, doc: &mut Document) -> Result<usize, SliderError> {
        let el = doc.create("div");
        doc.add_class(el, THUMB_CLASS)?;
        doc.set_style(el, "z-index", LOWER_LAYER)?;
        doc.append(self.track, el)?;
        self.thumbs.push(Thumb::new(el));
        if self.thumbs.len() == 2 {
            doc.clear_text(self.readout)?;
        }
        Ok(self.thumbs.len() - 1)
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounds and step.
    pub fn range(&self) -> &SliderRange {
        &self.range
    }

    /// Root element; `input` events are dispatched here.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Track element.
    pub fn track(&self) -> ElementId {
        self.track
    }

    /// Value readout element.
    pub fn readout(&self) -> ElementId {
        self.readout
    }

    /// Thumbs in order.
    pub fn thumbs(&self) -> &[Thumb] {
        &self.thumbs
    }

    /// Values of all thumbs in order.
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.thumbs.iter().map(Thumb::value)
    }

    /// Whether the slider has no thumbs and therefore needs no listeners.
    pub fn is_inert(&self) -> bool {
        self.thumbs.is_empty()
    }

    /// Whether pointer-down is ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the slider, mirroring a `disabled` attribute on the root.
    pub fn set_disabled(&mut self, doc: &mut Document, disabled: bool) -> Result<(), SliderError> {
        self.disabled = disabled;
        if disabled {
            doc.set_attribute(self.root, "disabled", "")?;
        } else {
            doc.remove_attribute(self.root, "disabled")?;
        }
        Ok(())
    }

    /// Index of the hovered thumb.
    pub fn hovered(&self) -> Option<usize> {
        self.thumbs.iter().position(Thumb::is_hovered)
    }

    /// Index of the active thumb.
    pub fn active(&self) -> Option<usize> {
        self.thumbs.iter().position(Thumb::is_active)
    }

    /// Listeners a host should register, named per `scheme`.
    ///
    /// Empty for an inert slider. Under [`EventScheme::Native`] a window-level
    /// `pointercancel` joins `blur` as a cancel binding.
    pub fn bindings(&self, scheme: EventScheme) -> SmallVec<[Binding; 7]> {
        if self.is_inert() {
            return SmallVec::new();
        }
        let mut bindings: SmallVec<[Binding; 7]> = [
            (Scope::Track, PointerKind::Move),
            (Scope::Track, PointerKind::Down),
            (Scope::Track, PointerKind::Leave),
            (Scope::Window, PointerKind::Move),
            (Scope::Window, PointerKind::Up),
            (Scope::Window, PointerKind::Cancel),
        ]
        .into_iter()
        .map(|(scope, kind)| Binding {
            scope,
            kind,
            event: scheme.name(kind),
        })
        .collect();
        if scheme == EventScheme::Native {
            bindings.push(Binding {
                scope: Scope::Window,
                kind: PointerKind::Cancel,
                event: POINTER_CANCEL,
            });
        }
        bindings
    }

    /// Measured geometry for thumb `index`, if laid out.
    pub fn geometry(&self, doc: &Document, index: usize) -> Option<TrackGeometry> {
        let thumb = self.thumbs.get(index)?;
        TrackGeometry::measure(doc, self.root, self.track, thumb.element())
    }

    /// Set thumb `index` to `value`, clamped into the range.
    ///
    /// When the clamped value differs from the stored one: stores it,
    /// dispatches an `input` event on the root if `trigger` is
    /// [`Trigger::User`], rewrites the thumb's `left` style if geometry is
    /// known, and updates the readout when this is the only thumb.
    ///
    /// Returns whether the value changed. Unknown indices and NaN return `false`.
    pub fn set_value(
        &mut self,
        doc: &mut Document,
        index: usize,
        value: f64,
        trigger: Trigger,
    ) -> Result<bool, SliderError> {
        let single = self.thumbs.len() == 1;
        let Some(thumb) = self.thumbs.get_mut(index) else {
            return Ok(false);
        };
        let Some(value) = thumb.store(&self.range, value) else {
            return Ok(false);
        };
        tracing::trace!(slider = %self.name, index, value, ?trigger, "value changed");

        if trigger == Trigger::User {
            doc.dispatch(Event::input(self.root, index, value))?;
        }
        self.write_left(doc, &self.thumbs[index])?;
        if single {
            doc.set_text(self.readout, format!("{value}"))?;
        }
        Ok(true)
    }

    /// Write the `left` style of every thumb that has a value.
    ///
    /// Call after the host reports new bounds: values set before layout, or
    /// before a resize, are only positioned here. Returns how many thumbs were
    /// positioned; `0` while the slider is not laid out.
    pub fn sync_positions(&self, doc: &mut Document) -> Result<usize, SliderError> {
        let mut positioned = 0;
        for thumb in &self.thumbs {
            if self.write_left(doc, thumb)? {
                positioned += 1;
            }
        }
        Ok(positioned)
    }

    /// Move thumb `index` to the value under `pointer_x`, snapped to the step.
    ///
    /// Applied as a [`Trigger::User`] change. Does nothing before layout.
    pub fn move_to_pointer(
        &mut self,
        doc: &mut Document,
        index: usize,
        pointer_x: f64,
    ) -> Result<bool, SliderError> {
        let Some(geo) = self.geometry(doc, index) else {
            return Ok(false);
        };
        let value = self.range.snap_fraction(geo.fraction_at(pointer_x));
        self.set_value(doc, index, value, Trigger::User)
    }

    /// Mark the thumb the hover policy picks for `pointer_x`, clearing the rest.
    ///
    /// Callers suppress this while any drag is in progress.
    pub fn update_hover(
        &mut self,
        doc: &mut Document,
        pointer_x: f64,
    ) -> Result<Option<usize>, SliderError> {
        let candidates: SmallVec<[HoverCandidate; 4]> =
            self.thumbs.iter().map(|t| self.candidate(doc, t)).collect();
        let winner = self.hover_policy.pick(pointer_x, &candidates);
        for (i, thumb) in self.thumbs.iter_mut().enumerate() {
            let on = winner == Some(i);
            if thumb.mark(ThumbState::HOVER, on) {
                doc.toggle_class(thumb.element(), HOVER_CLASS, on)?;
            }
        }
        if let Some(index) = winner {
            tracing::trace!(slider = %self.name, index, "hover");
        }
        Ok(winner)
    }

    /// Clear hover from every thumb. Returns `true` if any thumb was hovered.
    pub fn clear_hover(&mut self, doc: &mut Document) -> Result<bool, SliderError> {
        let mut changed = false;
        for thumb in &mut self.thumbs {
            if thumb.mark(ThumbState::HOVER, false) {
                doc.remove_class(thumb.element(), HOVER_CLASS)?;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Activate the hovered thumb and raise it above the others.
    ///
    /// Returns `None` (and changes nothing) when disabled or nothing is hovered.
    pub fn press(&mut self, doc: &mut Document) -> Result<Option<usize>, SliderError> {
        if self.disabled {
            return Ok(None);
        }
        let Some(index) = self.hovered() else {
            return Ok(None);
        };
        for thumb in &self.thumbs {
            doc.set_style(thumb.element(), "z-index", LOWER_LAYER)?;
        }
        let thumb = &mut self.thumbs[index];
        thumb.mark(ThumbState::ACTIVE, true);
        doc.add_class(thumb.element(), ThumbState::ACTIVE.class())?;
        doc.set_style(thumb.element(), "z-index", TOP_LAYER)?;
        Ok(Some(index))
    }

    /// Clear the active marker from thumb `index`.
    pub fn release(&mut self, doc: &mut Document, index: usize) -> Result<bool, SliderError> {
        let Some(thumb) = self.thumbs.get_mut(index) else {
            return Ok(false);
        };
        if !thumb.mark(ThumbState::ACTIVE, false) {
            return Ok(false);
        }
        doc.remove_class(thumb.element(), ACTIVE_CLASS)?;
        Ok(true)
    }

    fn write_left(&self, doc: &mut Document, thumb: &Thumb) -> Result<bool, SliderError> {
        let el = thumb.element();
        let left = TrackGeometry::measure(doc, self.root, self.track, el)
            .and_then(|geo| thumb.left(&self.range, &geo));
        let Some(left) = left else {
            return Ok(false);
        };
        doc.set_style(el, "left", format!("{left}px"))?;
        Ok(true)
    }

    fn candidate(&self, doc: &Document, thumb: &Thumb) -> HoverCandidate {
        let geo = TrackGeometry::measure(doc, self.root, self.track, thumb.element());
        match (thumb.value(), geo) {
            (Some(value), Some(geo)) => HoverCandidate {
                x: geo.thumb_x(self.range.fraction_of(value)),
                width: geo.thumb_width,
            },
            _ => {
                let measured = doc.bounds(thumb.element()).unwrap_or_default();
                HoverCandidate {
                    x: measured.x0,
                    width: measured.width(),
                }
            }
        }
    }
}
