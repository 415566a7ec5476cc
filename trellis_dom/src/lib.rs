// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis DOM: a headless, `no_std` document model for small UI controls.
//!
//! ## Overview
//!
//! This crate models the part of a browser-style document that controls need:
//! an arena of elements with tags, attributes, inline styles, class markers,
//! text, measured bounds, and listeners. It does not render anything.
//! A host mirrors the [`Document`] onto its own surface, reports measured
//! geometry back with [`Document::set_bounds`], and delivers events.
//!
//! ## Content
//!
//! Insertion helpers take `impl Into<Content>`. [`Content`] is a tagged union of
//! text, an existing [`ElementId`], or an opaque [`RawHandle`], so call sites
//! never need to guess which shape they were handed.
//!
//! ## Events
//!
//! [`Document::dispatch`] is synchronous: listeners on the target run first,
//! then the event bubbles through ancestors. A listener returning
//! [`Outcome::Stop`](event::Outcome::Stop) halts propagation.
//! The [`scheme`] module maps pointer interactions onto host event names,
//! resolved once per host via [`EventScheme::resolve`](scheme::EventScheme::resolve).
//!
//! ## Builders
//!
//! [`builders`] provides lists, tables, hyperlinks, and canvases on top of the
//! element helpers.
//!
//! ```rust
//! use trellis_dom::event::{Event, Outcome, INPUT};
//! use trellis_dom::Document;
//!
//! let mut doc = Document::new();
//! let form = doc.create("form");
//! let field = doc.create("input");
//! doc.append(form, field).unwrap();
//!
//! doc.add_listener(form, INPUT, move |ev| {
//!     assert_eq!((ev.target, ev.current_target), (field, form));
//!     Outcome::Continue
//! })
//! .unwrap();
//! assert_eq!(doc.dispatch(Event::new(INPUT, field)).unwrap(), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod builders;
pub mod event;
pub mod scheme;

mod content;
mod document;
mod error;
mod types;

pub use content::Content;
pub use document::Document;
pub use error::DomError;
pub use types::{ElementId, RAW_TAG, RawHandle, Str, TEXT_TAG};
