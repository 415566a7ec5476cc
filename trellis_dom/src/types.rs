// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: element identifiers, host handles, and strings.

use alloc::borrow::Cow;

/// Owned-or-static string used for tags, attribute values, styles, and text.
pub type Str = Cow<'static, str>;

/// Identifier for an element in a [`Document`](crate::Document) (generational).
///
/// Removing an element bumps the generation of its slot, so ids held past a
/// removal are detected as stale instead of aliasing a newer element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Opaque handle to a host-side object the document carries but never inspects.
///
/// Hosts use this for things that already exist on their surface (a canvas,
/// a native widget) and only need a slot in the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawHandle(pub u64);

/// Tag used for text nodes created from [`Content::Text`](crate::Content::Text).
pub const TEXT_TAG: &str = "#text";

/// Tag used for nodes created from [`Content::Raw`](crate::Content::Raw).
pub const RAW_TAG: &str = "#raw";
