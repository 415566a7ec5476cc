// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable content accepted by insertion helpers and builders.

use alloc::string::String;

use crate::types::{ElementId, RawHandle, Str};

/// Something that can be placed into the tree.
///
/// Every helper that accepts "a child" takes `impl Into<Content>`, so callers
/// can pass a string, an existing [`ElementId`], or a [`RawHandle`] directly.
///
/// ```
/// use trellis_dom::{Content, Document};
///
/// let mut doc = Document::new();
/// let list = doc.create("ul");
/// let item = doc.create("li");
/// doc.append(list, item).unwrap();
/// doc.append(item, "first").unwrap();
///
/// assert!(matches!(Content::from("x"), Content::Text(_)));
/// assert_eq!(doc.text_content(list), "first");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Plain text; materialized as a text node.
    Text(Str),
    /// An element already owned by the document.
    Element(ElementId),
    /// A host object; materialized as a placeholder node carrying the handle.
    Raw(RawHandle),
}

impl From<&'static str> for Content {
    fn from(s: &'static str) -> Self {
        Self::Text(Str::Borrowed(s))
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(Str::Owned(s))
    }
}

impl From<Str> for Content {
    fn from(s: Str) -> Self {
        Self::Text(s)
    }
}

impl From<ElementId> for Content {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<RawHandle> for Content {
    fn from(handle: RawHandle) -> Self {
        Self::Raw(handle)
    }
}
