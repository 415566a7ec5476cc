// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two sliders, one of them with two thumbs, on a host without pointer events.
//!
//! This example shows how:
//! - hover picks the thumb nearest the pointer,
//! - a press after a lost release ends the stale drag before anything else,
//! - the DOM builders can summarise the result as a table.
//!
//! Run:
//! - `cargo run -p trellis_demos --example range_slider`

use trellis_demos::{init_tracing, lay_out, render};
use trellis_dom::scheme::{EventScheme, HostCapabilities, PointerKind};
use trellis_dom::{Document, builders};
use trellis_slider::{PointerEvent, Slider, SliderConfig, SliderRange, SliderSet, Trigger};

fn main() {
    init_tracing();

    let mut doc = Document::new();
    let scheme = EventScheme::resolve(HostCapabilities {
        pointer_events: false,
    });
    let mut set = SliderSet::new(scheme);

    let price = SliderRange::new(0.0, 1000.0, 50.0).expect("valid range");
    let mut band = Slider::new(&mut doc, "price", price, SliderConfig::default().thumbs(2))
        .expect("slider builds");
    lay_out(&mut doc, &band, 0.0, 300.0);
    band.set_value(&mut doc, 0, 200.0, Trigger::Programmatic)
        .expect("slider is live");
    band.set_value(&mut doc, 1, 800.0, Trigger::Programmatic)
        .expect("slider is live");

    let rating = SliderRange::new(1.0, 5.0, 1.0).expect("valid range");
    let stars = Slider::new(&mut doc, "rating", rating, SliderConfig::default())
        .expect("slider builds");

    let band = set.insert(band);
    let stars = set.insert(stars);
    let origins = [(band, 0.0), (stars, 400.0)];
    for (id, x0) in origins {
        if let Some(slider) = set.get(id) {
            lay_out(&mut doc, slider, x0, 300.0);
        }
    }

    let script = [
        (PointerKind::Move, 230.0, Some(band)),
        (PointerKind::Down, 230.0, Some(band)),
        (PointerKind::Move, 170.0, None),
        // The release is lost; the next press only ends the stale drag.
        (PointerKind::Down, 450.0, Some(stars)),
        (PointerKind::Move, 450.0, Some(stars)),
        (PointerKind::Down, 450.0, Some(stars)),
        (PointerKind::Move, 700.0, None),
        (PointerKind::Cancel, 700.0, None),
    ];
    for (kind, x, target) in script {
        let mut event = PointerEvent::new(kind, (x, 10.0));
        event.target = target;
        let effect = set.handle(&mut doc, &event).expect("sliders are live");
        println!("{:<8} x={x:>5.1} -> {effect:?}", scheme.name(kind));
        for (id, x0) in origins {
            if let Some(slider) = set.get(id) {
                lay_out(&mut doc, slider, x0, 300.0);
                println!("    {:<7} {}", slider.name(), render(&doc, slider, 10.0));
            }
        }
    }

    let rows: Vec<Vec<String>> = origins
        .iter()
        .filter_map(|(id, _)| set.get(*id))
        .map(|s| {
            let values: Vec<String> = s
                .values()
                .map(|v| v.map_or_else(|| "-".to_owned(), |v| v.to_string()))
                .collect();
            vec![s.name().to_owned(), values.join(" .. ")]
        })
        .collect();
    let table =
        builders::table(&mut doc, Some(["slider", "values"]), rows).expect("table builds");
    println!("summary: {}", doc.text_content(table));
}
