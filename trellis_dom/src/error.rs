// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::ElementId;

/// Errors returned by [`Document`](crate::Document) mutators.
///
/// Queries on stale ids return `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The id refers to an element that has been removed.
    #[error("element {0:?} is no longer in the document")]
    StaleElement(ElementId),
    /// The insertion would make an element its own ancestor.
    #[error("inserting {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Prospective parent.
        parent: ElementId,
        /// Element being inserted.
        child: ElementId,
    },
    /// The reference node for a positional insert is not a child of the parent.
    #[error("{reference:?} is not a child of {parent:?}")]
    NotAChild {
        /// Parent the insert targeted.
        parent: ElementId,
        /// Reference node that was expected among its children.
        reference: ElementId,
    },
}
