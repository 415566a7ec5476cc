// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for slider invariants.
//!
//! - Values always stay within `[min, max]`.
//! - Pointer-driven values land on a step (or on `max`).
//! - At most one thumb is active across every slider in a set, and only that
//!   thumb carries the active class.
//! - Hover never changes while a drag is in progress.

use kurbo::Rect;
use proptest::prelude::*;
use trellis_dom::Document;
use trellis_dom::scheme::{EventScheme, PointerKind};
use trellis_slider::{
    ACTIVE_CLASS, PointerEvent, Slider, SliderConfig, SliderId, SliderRange, SliderSet, Trigger,
};

fn lay_out(doc: &mut Document, slider: &Slider, x0: f64) {
    let bar = Rect::new(x0, 0.0, x0 + 300.0, 20.0);
    doc.set_bounds(slider.root(), bar).unwrap();
    doc.set_bounds(slider.track(), bar).unwrap();
    for thumb in slider.thumbs() {
        doc.set_bounds(thumb.element(), Rect::new(x0, 0.0, x0 + 20.0, 20.0))
            .unwrap();
    }
}

fn arb_range() -> impl Strategy<Value = SliderRange> {
    (-1000.0..1000.0_f64, 0.5..500.0_f64, 0.01..1.0_f64).prop_map(|(min, span, step_frac)| {
        SliderRange::new(min, min + span, span * step_frac).unwrap()
    })
}

fn arb_kind() -> impl Strategy<Value = PointerKind> {
    prop_oneof![
        3 => Just(PointerKind::Move),
        2 => Just(PointerKind::Down),
        1 => Just(PointerKind::Up),
        1 => Just(PointerKind::Leave),
        1 => Just(PointerKind::Cancel),
    ]
}

/// Two sliders side by side: a two-thumb one at x 0 and a single-thumb one at x 400.
fn two_sliders(doc: &mut Document) -> (SliderSet, [SliderId; 2]) {
    let mut set = SliderSet::new(EventScheme::Native);
    let range = SliderRange::new(0.0, 100.0, 5.0).unwrap();
    let mut a = Slider::new(doc, "a", range, SliderConfig::default().thumbs(2)).unwrap();
    lay_out(doc, &a, 0.0);
    a.set_value(doc, 0, 25.0, Trigger::Programmatic).unwrap();
    a.set_value(doc, 1, 75.0, Trigger::Programmatic).unwrap();
    let b = Slider::new(doc, "b", range, SliderConfig::default()).unwrap();
    lay_out(doc, &b, 400.0);
    let ids = [set.insert(a), set.insert(b)];
    (set, ids)
}

proptest! {
    #[test]
    fn set_value_stays_in_range(range in arb_range(), value in -1e6..1e6_f64) {
        let mut doc = Document::new();
        let mut slider = Slider::new(&mut doc, "s", range, SliderConfig::default()).unwrap();
        slider.set_value(&mut doc, 0, value, Trigger::Programmatic).unwrap();
        let stored = slider.thumbs()[0].value().unwrap();
        prop_assert!(stored >= range.min() && stored <= range.max());
    }

    #[test]
    fn pointer_values_are_step_aligned(range in arb_range(), x in -200.0..600.0_f64) {
        let mut doc = Document::new();
        let mut slider = Slider::new(&mut doc, "s", range, SliderConfig::default()).unwrap();
        lay_out(&mut doc, &slider, 0.0);
        slider.move_to_pointer(&mut doc, 0, x).unwrap();

        let v = slider.thumbs()[0].value().unwrap();
        prop_assert!(v >= range.min() && v <= range.max());
        let steps = (v - range.min()) / range.step();
        prop_assert!(v == range.max() || (steps - steps.round()).abs() < 1e-6);
    }

    #[test]
    fn at_most_one_active_thumb(
        events in prop::collection::vec((arb_kind(), 0.0..800.0_f64, 0..3_usize), 1..40),
    ) {
        let mut doc = Document::new();
        let (mut set, ids) = two_sliders(&mut doc);

        for (kind, x, target) in events {
            let event = PointerEvent {
                kind,
                position: (x, 10.0).into(),
                target: ids.get(target).copied(),
            };
            set.handle(&mut doc, &event).unwrap();

            let active: Vec<_> = ids
                .iter()
                .flat_map(|id| {
                    let slider = set.get(*id).unwrap();
                    slider.active().map(|thumb| (*id, thumb))
                })
                .collect();
            prop_assert!(active.len() <= 1);
            let session = set.active().map(|t| (t.slider, t.thumb));
            prop_assert_eq!(active.first().copied(), session);

            let mut marked = 0;
            for id in ids {
                for thumb in set.get(id).unwrap().thumbs() {
                    let has_class = doc.has_class(thumb.element(), ACTIVE_CLASS);
                    prop_assert_eq!(has_class, thumb.is_active());
                    marked += usize::from(has_class);
                }
            }
            prop_assert!(marked <= 1);
        }
    }

    #[test]
    fn hover_is_frozen_during_drag(
        moves in prop::collection::vec((0.0..800.0_f64, 0..3_usize), 1..20),
    ) {
        let mut doc = Document::new();
        let (mut set, ids) = two_sliders(&mut doc);
        // Start dragging the lower thumb of slider a (centre at 80px).
        set.handle(&mut doc, &PointerEvent::new(PointerKind::Move, (80.0, 10.0)).over(ids[0]))
            .unwrap();
        set.handle(&mut doc, &PointerEvent::new(PointerKind::Down, (80.0, 10.0)).over(ids[0]))
            .unwrap();
        let before: Vec<_> = ids.iter().map(|id| set.get(*id).unwrap().hovered()).collect();

        for (x, target) in moves {
            let event = PointerEvent {
                kind: PointerKind::Move,
                position: (x, 10.0).into(),
                target: ids.get(target).copied(),
            };
            set.handle(&mut doc, &event).unwrap();
            let now: Vec<_> = ids.iter().map(|id| set.get(*id).unwrap().hovered()).collect();
            prop_assert_eq!(&now, &before);
            prop_assert_eq!(set.get(ids[1]).unwrap().thumbs()[0].value(), None);
        }
    }
}
