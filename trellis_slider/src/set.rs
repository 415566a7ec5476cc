// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-level controller: a set of sliders sharing one drag session.

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;
use trellis_dom::Document;
use trellis_dom::scheme::{EventScheme, PointerKind};

use crate::error::SliderError;
use crate::session::{DragSession, ThumbRef};
use crate::slider::{Binding, Slider};

/// Identifier of a slider within a [`SliderSet`].
///
/// Ids are never reissued: once a slider is removed its id resolves to
/// nothing for the life of the set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(pub u32);

/// A pointer interaction delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// Slider whose track received the event. `None` for window-level events.
    pub target: Option<SliderId>,
}

impl PointerEvent {
    /// A window-level event.
    pub fn new(kind: PointerKind, position: impl Into<Point>) -> Self {
        Self {
            kind,
            position: position.into(),
            target: None,
        }
    }

    /// Mark the event as received by `slider`'s track.
    #[must_use]
    pub fn over(mut self, slider: SliderId) -> Self {
        self.target = Some(slider);
        self
    }
}

/// What handling a [`PointerEvent`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    /// Nothing applied.
    Ignored,
    /// Hover was recomputed on a slider.
    Hovered {
        /// Slider under the pointer.
        slider: SliderId,
        /// Thumb now hovered.
        thumb: Option<usize>,
    },
    /// Hover was cleared because the pointer left a track.
    HoverCleared(SliderId),
    /// A thumb became the active drag.
    DragStarted(ThumbRef),
    /// The active thumb followed the pointer.
    Dragged {
        /// Thumb being dragged.
        thumb: ThumbRef,
        /// Whether its value changed.
        changed: bool,
    },
    /// The drag finished.
    DragEnded(ThumbRef),
}

/// Sliders plus the single drag session they share.
///
/// The host registers the listeners from [`SliderSet::bindings`] and feeds
/// every delivered event to [`SliderSet::handle`] (or
/// [`SliderSet::handle_named`] with the raw event name). At most one thumb
/// across the whole set is active at any time, and hover is frozen while a
/// drag is in progress.
///
/// ```rust
/// use kurbo::Rect;
/// use trellis_dom::Document;
/// use trellis_dom::scheme::{EventScheme, PointerKind};
/// use trellis_slider::{Effect, PointerEvent, Slider, SliderConfig, SliderRange, SliderSet};
///
/// let mut doc = Document::new();
/// let mut set = SliderSet::new(EventScheme::Native);
/// let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
/// let slider = Slider::new(&mut doc, "zoom", range, SliderConfig::default()).unwrap();
/// let (root, track) = (slider.root(), slider.track());
/// let thumb = slider.thumbs()[0].element();
/// let id = set.insert(slider);
///
/// let bar = Rect::new(0.0, 0.0, 300.0, 20.0);
/// doc.set_bounds(root, bar).unwrap();
/// doc.set_bounds(track, bar).unwrap();
/// doc.set_bounds(thumb, Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
///
/// set.handle(&mut doc, &PointerEvent::new(PointerKind::Move, (113.6, 10.0)).over(id)).unwrap();
/// let down = PointerEvent::new(PointerKind::Down, (113.6, 10.0)).over(id);
/// assert!(matches!(set.handle(&mut doc, &down).unwrap(), Effect::DragStarted(_)));
/// assert_eq!(set.get(id).unwrap().thumbs()[0].value(), Some(37.0));
/// ```
#[derive(Debug, Default)]
pub struct SliderSet {
    sliders: Vec<Option<Slider>>,
    session: DragSession,
    scheme: EventScheme,
}

impl SliderSet {
    /// Create an empty set for a host speaking `scheme`.
    pub fn new(scheme: EventScheme) -> Self {
        Self {
            sliders: Vec::new(),
            session: DragSession::new(),
            scheme,
        }
    }

    /// Event naming used for bindings and [`SliderSet::handle_named`].
    pub fn scheme(&self) -> EventScheme {
        self.scheme
    }

    /// Shared drag session.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Thumb being dragged anywhere in the set.
    pub fn active(&self) -> Option<ThumbRef> {
        self.session.active()
    }

    /// Take ownership of a slider. Each call issues a fresh id, even after
    /// removals.
    pub fn insert(&mut self, slider: Slider) -> SliderId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "slider counts stay far below u32::MAX"
        )]
        let id = SliderId(self.sliders.len() as u32);
        self.sliders.push(Some(slider));
        id
    }

    /// Look up a slider.
    pub fn get(&self, id: SliderId) -> Option<&Slider> {
        self.sliders.get(id.0 as usize)?.as_ref()
    }

    /// Look up a slider mutably.
    pub fn get_mut(&mut self, id: SliderId) -> Option<&mut Slider> {
        slot_mut(&mut self.sliders, id)
    }

    /// Ids of all live sliders, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = SliderId> + '_ {
        self.sliders.iter().enumerate().filter_map(|(i, s)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "indices come from insert, which issued them as u32"
            )]
            let id = SliderId(i as u32);
            s.as_ref().map(|_| id)
        })
    }

    /// Remove a slider and its elements from `doc`, ending its drag if any.
    pub fn remove(
        &mut self,
        doc: &mut Document,
        id: SliderId,
    ) -> Result<Option<Slider>, SliderError> {
        let Some(slider) = self.sliders.get_mut(id.0 as usize).and_then(Option::take) else {
            return Ok(None);
        };
        self.session.end_for(id);
        if doc.is_alive(slider.root()) {
            doc.remove(slider.root())?;
        }
        Ok(Some(slider))
    }

    /// Listeners the host should register for slider `id`.
    pub fn bindings(&self, id: SliderId) -> SmallVec<[Binding; 7]> {
        self.get(id)
            .map(|s| s.bindings(self.scheme))
            .unwrap_or_default()
    }

    /// Handle a host event by name. Names outside the scheme are ignored.
    pub fn handle_named(
        &mut self,
        doc: &mut Document,
        name: &str,
        position: impl Into<Point>,
        target: Option<SliderId>,
    ) -> Result<Effect, SliderError> {
        let Some(kind) = self.scheme.classify(name) else {
            return Ok(Effect::Ignored);
        };
        let event = PointerEvent {
            kind,
            position: position.into(),
            target,
        };
        self.handle(doc, &event)
    }

    /// Apply one pointer interaction.
    ///
    /// - Move: drags the active thumb if there is one, otherwise recomputes
    ///   hover on the target slider.
    /// - Down on a target: ends any stale drag, activates the hovered thumb,
    ///   and moves it to the pointer.
    /// - Up, Cancel: ends the drag.
    /// - Leave on a target: clears its hover.
    pub fn handle(
        &mut self,
        doc: &mut Document,
        event: &PointerEvent,
    ) -> Result<Effect, SliderError> {
        let x = event.position.x;
        match event.kind {
            PointerKind::Move => {
                if let Some(thumb) = self.session.active() {
                    let Some(slider) = slot_mut(&mut self.sliders, thumb.slider) else {
                        self.session.end();
                        return Ok(Effect::Ignored);
                    };
                    let changed = slider.move_to_pointer(doc, thumb.thumb, x)?;
                    return Ok(Effect::Dragged { thumb, changed });
                }
                let Some((id, slider)) = self.target_mut(event.target) else {
                    return Ok(Effect::Ignored);
                };
                let thumb = slider.update_hover(doc, x)?;
                Ok(Effect::Hovered { slider: id, thumb })
            }
            PointerKind::Down => {
                if self.target_mut(event.target).is_none() {
                    return Ok(Effect::Ignored);
                }
                // An up that never arrived.
                self.finish_drag(doc)?;
                let Some((id, slider)) = self.target_mut(event.target) else {
                    return Ok(Effect::Ignored);
                };
                let Some(index) = slider.press(doc)? else {
                    return Ok(Effect::Ignored);
                };
                let thumb = ThumbRef {
                    slider: id,
                    thumb: index,
                };
                self.session.begin(thumb);
                if let Some(slider) = slot_mut(&mut self.sliders, id) {
                    slider.move_to_pointer(doc, index, x)?;
                }
                Ok(Effect::DragStarted(thumb))
            }
            PointerKind::Up | PointerKind::Cancel => {
                if event.kind == PointerKind::Cancel {
                    tracing::debug!("pointer lost; cancelling drag");
                }
                Ok(self
                    .finish_drag(doc)?
                    .map_or(Effect::Ignored, Effect::DragEnded))
            }
            PointerKind::Leave => {
                let Some((id, slider)) = self.target_mut(event.target) else {
                    return Ok(Effect::Ignored);
                };
                if slider.clear_hover(doc)? {
                    Ok(Effect::HoverCleared(id))
                } else {
                    Ok(Effect::Ignored)
                }
            }
        }
    }

    /// Live, non-inert target slider.
    fn target_mut(&mut self, target: Option<SliderId>) -> Option<(SliderId, &mut Slider)> {
        let id = target?;
        slot_mut(&mut self.sliders, id)
            .filter(|s| !s.is_inert())
            .map(|s| (id, s))
    }

    fn finish_drag(&mut self, doc: &mut Document) -> Result<Option<ThumbRef>, SliderError> {
        let Some(thumb) = self.session.end() else {
            return Ok(None);
        };
        if let Some(slider) = slot_mut(&mut self.sliders, thumb.slider) {
            slider.release(doc, thumb.thumb)?;
        }
        Ok(Some(thumb))
    }
}

fn slot_mut(sliders: &mut [Option<Slider>], id: SliderId) -> Option<&mut Slider> {
    sliders.get_mut(id.0 as usize)?.as_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::SliderRange;
    use crate::slider::{SliderConfig, Trigger};
    use crate::thumb::{ACTIVE_CLASS, HOVER_CLASS};
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Rect;
    use trellis_dom::event::{INPUT, Outcome};

    /// Thumb centre for a value on a 0..=100 slider laid out at `x0`.
    fn centre(x0: f64, value: f64) -> f64 {
        x0 + 10.0 + value / 100.0 * 280.0
    }

    fn add(
        doc: &mut Document,
        set: &mut SliderSet,
        x0: f64,
        step: f64,
        config: SliderConfig,
    ) -> SliderId {
        let range = SliderRange::new(0.0, 100.0, step).unwrap();
        let s = Slider::new(doc, "s", range, config).unwrap();
        let bar = Rect::new(x0, 0.0, x0 + 300.0, 20.0);
        doc.set_bounds(s.root(), bar).unwrap();
        doc.set_bounds(s.track(), bar).unwrap();
        for t in s.thumbs() {
            doc.set_bounds(t.element(), Rect::new(x0, 0.0, x0 + 20.0, 20.0))
                .unwrap();
        }
        set.insert(s)
    }

    fn ev(kind: PointerKind, x: f64, target: Option<SliderId>) -> PointerEvent {
        PointerEvent {
            kind,
            position: Point::new(x, 10.0),
            target,
        }
    }

    fn value(set: &SliderSet, id: SliderId, thumb: usize) -> Option<f64> {
        set.get(id).unwrap().thumbs()[thumb].value()
    }

    #[test]
    fn press_drag_release() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        let thumb = ThumbRef { slider: id, thumb: 0 };

        set.handle(&mut doc, &ev(PointerKind::Move, 113.6, Some(id)))
            .unwrap();
        assert_eq!(
            set.handle(&mut doc, &ev(PointerKind::Down, 113.6, Some(id)))
                .unwrap(),
            Effect::DragStarted(thumb)
        );
        assert_eq!(value(&set, id, 0), Some(37.0));
        let readout = set.get(id).unwrap().readout();
        assert_eq!(doc.text_of(readout), Some("37"));

        // Window-level moves keep dragging, even past the track.
        assert_eq!(
            set.handle(&mut doc, &ev(PointerKind::Move, 900.0, None))
                .unwrap(),
            Effect::Dragged {
                thumb,
                changed: true
            }
        );
        assert_eq!(value(&set, id, 0), Some(100.0));

        assert_eq!(
            set.handle(&mut doc, &ev(PointerKind::Up, 900.0, None))
                .unwrap(),
            Effect::DragEnded(thumb)
        );
        assert_eq!(set.active(), None);
        let el = set.get(id).unwrap().thumbs()[0].element();
        assert!(!doc.has_class(el, ACTIVE_CLASS));
        // Moves after release do not drag.
        set.handle(&mut doc, &ev(PointerKind::Move, 0.0, None))
            .unwrap();
        assert_eq!(value(&set, id, 0), Some(100.0));
    }

    #[test]
    fn drag_snaps_to_step() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let range = SliderRange::new(0.0, 10.0, 2.0).unwrap();
        let s = Slider::new(&mut doc, "s", range, SliderConfig::default()).unwrap();
        let bar = Rect::new(0.0, 0.0, 300.0, 20.0);
        doc.set_bounds(s.root(), bar).unwrap();
        doc.set_bounds(s.track(), bar).unwrap();
        doc.set_bounds(s.thumbs()[0].element(), Rect::new(0.0, 0.0, 20.0, 20.0))
            .unwrap();
        let id = set.insert(s);

        set.handle(&mut doc, &ev(PointerKind::Move, 150.0, Some(id)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, 150.0, Some(id)))
            .unwrap();
        assert_eq!(value(&set, id, 0), Some(6.0));
    }

    #[test]
    fn hover_is_frozen_while_dragging() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let a = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default().thumbs(2));
        let b = add(&mut doc, &mut set, 400.0, 1.0, SliderConfig::default());
        {
            let s = set.get_mut(a).unwrap();
            s.set_value(&mut doc, 0, 10.0, Trigger::Programmatic).unwrap();
            s.set_value(&mut doc, 1, 90.0, Trigger::Programmatic).unwrap();
        }

        set.handle(&mut doc, &ev(PointerKind::Move, centre(0.0, 10.0), Some(a)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, centre(0.0, 10.0), Some(a)))
            .unwrap();

        // The pointer crosses thumb 1 and the other slider; hover stays put.
        let moved = set
            .handle(&mut doc, &ev(PointerKind::Move, centre(0.0, 90.0), Some(a)))
            .unwrap();
        assert!(matches!(moved, Effect::Dragged { .. }));
        set.handle(&mut doc, &ev(PointerKind::Move, 500.0, Some(b)))
            .unwrap();
        assert_eq!(set.get(a).unwrap().hovered(), Some(0));
        assert_eq!(set.get(b).unwrap().hovered(), None);
        let b_thumb = set.get(b).unwrap().thumbs()[0].element();
        assert!(!doc.has_class(b_thumb, HOVER_CLASS));
    }

    #[test]
    fn only_one_thumb_is_active_across_sliders() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let a = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        let b = add(&mut doc, &mut set, 400.0, 1.0, SliderConfig::default());

        set.handle(&mut doc, &ev(PointerKind::Move, 50.0, Some(a)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, 50.0, Some(a)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Leave, 350.0, Some(a)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Up, 350.0, Some(a)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Move, 450.0, Some(b)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, 450.0, Some(b)))
            .unwrap();

        assert_eq!(set.active(), Some(ThumbRef { slider: b, thumb: 0 }));
        let active: usize = set
            .ids()
            .filter_map(|id| set.get(id))
            .map(|s| s.thumbs().iter().filter(|t| t.is_active()).count())
            .sum();
        assert_eq!(active, 1);
    }

    #[test]
    fn stale_drag_is_released_on_next_press() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let a = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        let b = add(&mut doc, &mut set, 400.0, 1.0, SliderConfig::default());

        set.handle(&mut doc, &ev(PointerKind::Move, 450.0, Some(b)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Move, 50.0, Some(a)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, 50.0, Some(a)))
            .unwrap();
        // No pointer-up: press on b directly.
        let started = set
            .handle(&mut doc, &ev(PointerKind::Down, 450.0, Some(b)))
            .unwrap();
        assert_eq!(started, Effect::DragStarted(ThumbRef { slider: b, thumb: 0 }));
        assert_eq!(set.get(a).unwrap().active(), None);
        assert_eq!(set.get(b).unwrap().active(), Some(0));
    }

    #[test]
    fn sequential_drags_on_a_two_thumb_slider() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default().thumbs(2));
        {
            let s = set.get_mut(id).unwrap();
            s.set_value(&mut doc, 0, 20.0, Trigger::Programmatic).unwrap();
            s.set_value(&mut doc, 1, 80.0, Trigger::Programmatic).unwrap();
        }

        for (thumb, from, to) in [(0, 20.0, 30.0), (1, 80.0, 70.0)] {
            set.handle(&mut doc, &ev(PointerKind::Move, centre(0.0, from), Some(id)))
                .unwrap();
            let started = set
                .handle(&mut doc, &ev(PointerKind::Down, centre(0.0, from), Some(id)))
                .unwrap();
            assert_eq!(started, Effect::DragStarted(ThumbRef { slider: id, thumb }));
            set.handle(&mut doc, &ev(PointerKind::Move, centre(0.0, to), None))
                .unwrap();
            set.handle(&mut doc, &ev(PointerKind::Up, centre(0.0, to), None))
                .unwrap();
        }
        assert_eq!(value(&set, id, 0), Some(30.0));
        assert_eq!(value(&set, id, 1), Some(70.0));
        let s = set.get(id).unwrap();
        assert_eq!(doc.text_of(s.readout()), None);
    }

    #[test]
    fn disabled_slider_ignores_press() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default().disabled(true));
        let fired = Rc::new(Cell::new(0_u32));
        let f = Rc::clone(&fired);
        let root = set.get(id).unwrap().root();
        doc.add_listener(root, INPUT, move |_| {
            f.set(f.get() + 1);
            Outcome::Continue
        })
        .unwrap();

        set.handle(&mut doc, &ev(PointerKind::Move, 100.0, Some(id)))
            .unwrap();
        assert_eq!(
            set.handle(&mut doc, &ev(PointerKind::Down, 100.0, Some(id)))
                .unwrap(),
            Effect::Ignored
        );
        set.handle(&mut doc, &ev(PointerKind::Move, 200.0, None))
            .unwrap();
        assert_eq!(value(&set, id, 0), None);
        assert_eq!(fired.get(), 0);
        assert!(!set.session().is_dragging());
    }

    #[test]
    fn user_drags_fire_input_once_per_change() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        let fired = Rc::new(Cell::new(0_u32));
        let f = Rc::clone(&fired);
        let root = set.get(id).unwrap().root();
        doc.add_listener(root, INPUT, move |_| {
            f.set(f.get() + 1);
            Outcome::Continue
        })
        .unwrap();

        set.handle(&mut doc, &ev(PointerKind::Move, 10.0, Some(id)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, 10.0, Some(id)))
            .unwrap();
        // Same spot again: value unchanged, no event.
        let again = set
            .handle(&mut doc, &ev(PointerKind::Move, 10.0, None))
            .unwrap();
        assert!(matches!(again, Effect::Dragged { changed: false, .. }));
        set.handle(&mut doc, &ev(PointerKind::Move, 150.0, None))
            .unwrap();
        assert_eq!(fired.get(), 2);

        set.get_mut(id)
            .unwrap()
            .set_value(&mut doc, 0, 3.0, Trigger::Programmatic)
            .unwrap();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn inert_sliders_are_skipped() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default().thumbs(0));
        assert!(set.bindings(id).is_empty());
        for kind in PointerKind::ALL {
            assert_eq!(
                set.handle(&mut doc, &ev(kind, 50.0, Some(id))).unwrap(),
                Effect::Ignored
            );
        }
    }

    #[test]
    fn cancel_ends_the_drag_like_up() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Fallback);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());

        set.handle_named(&mut doc, "mousemove", (50.0, 5.0), Some(id))
            .unwrap();
        set.handle_named(&mut doc, "mousedown", (50.0, 5.0), Some(id))
            .unwrap();
        assert!(set.session().is_dragging());
        // Native names are not part of the fallback scheme.
        assert_eq!(
            set.handle_named(&mut doc, "pointerup", (50.0, 5.0), None)
                .unwrap(),
            Effect::Ignored
        );
        assert!(matches!(
            set.handle_named(&mut doc, "blur", (0.0, 0.0), None).unwrap(),
            Effect::DragEnded(_)
        ));
        assert!(!set.session().is_dragging());
    }

    #[test]
    fn removing_a_slider_ends_its_drag() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let id = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        let root = set.get(id).unwrap().root();

        set.handle(&mut doc, &ev(PointerKind::Move, 50.0, Some(id)))
            .unwrap();
        set.handle(&mut doc, &ev(PointerKind::Down, 50.0, Some(id)))
            .unwrap();
        assert!(set.remove(&mut doc, id).unwrap().is_some());
        assert!(!set.session().is_dragging());
        assert!(!doc.is_alive(root));
        assert!(set.get(id).is_none());
        assert_eq!(set.ids().count(), 0);
        assert_eq!(
            set.handle(&mut doc, &ev(PointerKind::Move, 80.0, None))
                .unwrap(),
            Effect::Ignored
        );
    }

    #[test]
    fn removed_ids_are_never_reissued() {
        let mut doc = Document::new();
        let mut set = SliderSet::new(EventScheme::Native);
        let first = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        set.remove(&mut doc, first).unwrap();

        let second = add(&mut doc, &mut set, 0.0, 1.0, SliderConfig::default());
        assert_ne!(first, second);
        assert!(set.get(first).is_none());
        assert!(set.get(second).is_some());
        assert!(set.remove(&mut doc, first).unwrap().is_none());
        assert!(set.bindings(first).is_empty());
        assert_eq!(set.ids().collect::<Vec<_>>(), [second]);
    }
}
