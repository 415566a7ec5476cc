// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a single-thumb slider with a scripted pointer and watch `input` events.
//!
//! This example shows how to:
//! - resolve the event scheme once from host capabilities,
//! - register the listeners a slider asks for,
//! - feed host events into a `SliderSet` by name,
//! - listen for `input` events bubbling from the slider to its form.
//!
//! Run:
//! - `cargo run -p trellis_demos --example slider_drag`
//! - `RUST_LOG=trace cargo run -p trellis_demos --example slider_drag` for per-value logs.

use trellis_demos::{init_tracing, lay_out, render};
use trellis_dom::Document;
use trellis_dom::event::{EventDetail, INPUT, Outcome};
use trellis_dom::scheme::{EventScheme, HostCapabilities};
use trellis_slider::{Slider, SliderConfig, SliderRange, SliderSet, Trigger};

fn main() {
    init_tracing();

    let mut doc = Document::new();
    let scheme = EventScheme::resolve(HostCapabilities::default());
    let mut set = SliderSet::new(scheme);

    let form = doc.create("form");
    let range = SliderRange::new(0.0, 100.0, 1.0).expect("valid range");
    let config = SliderConfig::default()
        .attribute("id", "volume")
        .style("width", "300px");
    let mut slider = Slider::new(&mut doc, "volume", range, config).expect("slider builds");
    doc.append(form, slider.root()).expect("form is live");

    lay_out(&mut doc, &slider, 0.0, 300.0);
    slider
        .set_value(&mut doc, 0, 50.0, Trigger::Programmatic)
        .expect("slider is live");
    let id = set.insert(slider);

    doc.add_listener(form, INPUT, |ev| {
        if let EventDetail::Value { index, value } = ev.detail {
            println!("  input: thumb {index} -> {value}");
        }
        Outcome::Continue
    })
    .expect("form is live");

    println!("listeners to register:");
    for binding in set.bindings(id) {
        println!("  {:?} {:<12} ({:?})", binding.scope, binding.event, binding.kind);
    }

    let script: [(&str, f64); 6] = [
        ("pointermove", 150.0),
        ("pointerdown", 150.0),
        ("pointermove", 113.6),
        ("pointermove", 40.0),
        ("pointermove", -80.0),
        ("pointerup", -80.0),
    ];
    for (name, x) in script {
        let effect = set
            .handle_named(&mut doc, name, (x, 10.0), Some(id))
            .expect("slider is live");
        if let Some(slider) = set.get(id) {
            lay_out(&mut doc, slider, 0.0, 300.0);
            println!("{name:<12} x={x:>6.1}  {:<40} {effect:?}", render(&doc, slider, 10.0));
        }
    }

    println!(
        "final value: {:?}",
        set.get(id).and_then(|s| s.thumbs()[0].value())
    );
}
