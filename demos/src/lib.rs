// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Trellis demos: a fake layout pass, a text
//! renderer, and logging setup.

use kurbo::Rect;
use trellis_dom::Document;
use trellis_slider::Slider;

/// Thumb width every demo lays out with.
pub const THUMB_WIDTH: f64 = 20.0;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .without_time()
        .try_init();
}

/// Stand in for a host layout pass: report bounds for the root, track, and thumbs,
/// then position thumbs from their values.
///
/// Thumbs are reported at their current `left` offset, as a browser would.
///
/// # Panics
///
/// Panics if the slider's elements are no longer in `doc`.
pub fn lay_out(doc: &mut Document, slider: &Slider, x0: f64, width: f64) {
    let bar = Rect::new(x0, 0.0, x0 + width, THUMB_WIDTH);
    doc.set_bounds(slider.root(), bar).expect("slider is live");
    doc.set_bounds(slider.track(), bar).expect("slider is live");
    place_thumbs(doc, slider, x0);
    slider.sync_positions(doc).expect("slider is live");
    place_thumbs(doc, slider, x0);
}

fn place_thumbs(doc: &mut Document, slider: &Slider, x0: f64) {
    for thumb in slider.thumbs() {
        let el = thumb.element();
        let left = doc
            .style(el, "left")
            .and_then(|l| l.strip_suffix("px"))
            .and_then(|l| l.parse::<f64>().ok())
            .unwrap_or(0.0);
        doc.set_bounds(el, Rect::new(x0 + left, 0.0, x0 + left + THUMB_WIDTH, THUMB_WIDTH))
            .expect("slider is live");
    }
}

/// Draw a slider as one line of text, one column per `scale` pixels.
///
/// Thumbs are digits; `*` marks the active thumb and `^` the hovered one.
pub fn render(doc: &Document, slider: &Slider, scale: f64) -> String {
    let Some(track) = doc.bounds(slider.track()) else {
        return String::new();
    };
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "demo widths are small and positive"
    )]
    let cols = (track.width() / scale) as usize;
    let mut line: Vec<char> = vec!['-'; cols.max(1)];
    for (i, thumb) in slider.thumbs().iter().enumerate() {
        let Some(bounds) = doc.bounds(thumb.element()) else {
            continue;
        };
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the line below"
        )]
        let col = (((bounds.center().x - track.x0) / scale).max(0.0) as usize).min(line.len() - 1);
        line[col] = if thumb.is_active() {
            '*'
        } else if thumb.is_hovered() {
            '^'
        } else {
            u32::try_from(i % 10)
                .ok()
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or('?')
        };
    }
    let mut out: String = line.into_iter().collect();
    if let Some(text) = doc.text_of(slider.readout()) {
        out.push_str("  ");
        out.push_str(text);
    }
    out
}
