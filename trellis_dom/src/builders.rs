// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small builders for common structures: lists, tables, hyperlinks, and canvases.
//!
//! Every cell, item, and label accepts [`Content`], so text, existing
//! elements, and host handles mix freely.

use alloc::format;

use crate::content::Content;
use crate::document::Document;
use crate::error::DomError;
use crate::types::{ElementId, Str};

/// Build an unordered list, one `li` per item.
///
/// ```
/// use trellis_dom::{Document, builders};
///
/// let mut doc = Document::new();
/// let ul = builders::list(&mut doc, ["a", "b"]).unwrap();
/// assert_eq!(doc.tag(ul), Some("ul"));
/// assert_eq!(doc.children_of(ul).len(), 2);
/// assert_eq!(doc.text_content(ul), "ab");
/// ```
pub fn list<I>(doc: &mut Document, items: I) -> Result<ElementId, DomError>
where
    I: IntoIterator,
    I::Item: Into<Content>,
{
    let ul = doc.create("ul");
    for item in items {
        let li = doc.create("li");
        doc.append(ul, li)?;
        doc.append(li, item)?;
    }
    Ok(ul)
}

/// Build a table with an optional header row and body rows.
///
/// The header goes into `thead > tr > th*`; rows into `tbody > tr* > td*`.
/// Rows may have different lengths; nothing is padded.
pub fn table<H, R, C>(
    doc: &mut Document,
    header: Option<H>,
    rows: R,
) -> Result<ElementId, DomError>
where
    H: IntoIterator,
    H::Item: Into<Content>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Content>,
{
    let table = doc.create("table");
    if let Some(header) = header {
        let thead = doc.create("thead");
        doc.append(table, thead)?;
        let tr = doc.create("tr");
        doc.append(thead, tr)?;
        for cell in header {
            let th = doc.create("th");
            doc.append(tr, th)?;
            doc.append(th, cell)?;
        }
    }
    let tbody = doc.create("tbody");
    doc.append(table, tbody)?;
    for row in rows {
        let tr = doc.create("tr");
        doc.append(tbody, tr)?;
        for cell in row {
            let td = doc.create("td");
            doc.append(tr, td)?;
            doc.append(td, cell)?;
        }
    }
    Ok(table)
}

/// Build a hyperlink `a[href]` around `content`.
pub fn link(
    doc: &mut Document,
    href: impl Into<Str>,
    content: impl Into<Content>,
) -> Result<ElementId, DomError> {
    let a = doc.create("a");
    doc.set_attribute(a, "href", href)?;
    doc.append(a, content)?;
    Ok(a)
}

/// Build a `canvas` sized in device pixels.
///
/// The drawing surface itself belongs to the host; it can be attached to the
/// element afterwards as a [`RawHandle`](crate::RawHandle) child.
pub fn canvas(doc: &mut Document, width: u32, height: u32) -> ElementId {
    doc.create_with(
        "canvas",
        [("width", format!("{width}")), ("height", format!("{height}"))],
        core::iter::empty::<(Str, Str)>(),
    )
}
