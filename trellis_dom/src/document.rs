// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element arena: structure, attributes, styles, markers, and listeners.

use alloc::{boxed::Box, string::String, vec::Vec};

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::content::Content;
use crate::error::DomError;
use crate::event::{Event, ListenerId, Outcome, run};
use crate::types::{ElementId, RAW_TAG, RawHandle, Str, TEXT_TAG};

type Handler = Box<dyn FnMut(&Event) -> Outcome>;

struct Listener {
    id: ListenerId,
    event_type: Str,
    handler: Handler,
}

#[derive(Clone, Debug)]
struct Element {
    generation: u32,
    tag: Str,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: HashMap<Str, Str>,
    style: HashMap<Str, Str>,
    classes: SmallVec<[Str; 4]>,
    text: Option<Str>,
    raw: Option<RawHandle>,
    bounds: Rect,
}

impl Element {
    fn new(generation: u32, tag: Str) -> Self {
        Self {
            generation,
            tag,
            parent: None,
            children: Vec::new(),
            attributes: HashMap::new(),
            style: HashMap::new(),
            classes: SmallVec::new(),
            text: None,
            raw: None,
            bounds: Rect::ZERO,
        }
    }
}

/// A headless document: an arena of elements plus their listeners.
///
/// The document is the single source of truth for what a host should show.
/// Hosts mirror it onto their surface, report measured geometry back with
/// [`Document::set_bounds`], and deliver events with [`Document::dispatch`].
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use trellis_dom::Document;
///
/// let mut doc = Document::new();
/// let root = doc.create_with("div", [("id", "app")], [("width", "300px")]);
/// let label = doc.append(root, "hello").unwrap();
///
/// doc.add_class(root, "ready").unwrap();
/// doc.set_bounds(root, Rect::new(0.0, 0.0, 300.0, 40.0)).unwrap();
///
/// assert_eq!(doc.parent_of(label), Some(root));
/// assert_eq!(doc.attribute(root, "id"), Some("app"));
/// assert_eq!(doc.style(root, "width"), Some("300px"));
/// assert!(doc.has_class(root, "ready"));
/// assert_eq!(doc.text_content(root), "hello");
/// ```
pub struct Document {
    /// slots
    nodes: Vec<Option<Element>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    listeners: HashMap<ElementId, Vec<Listener>>,
    next_listener: u64,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let listeners: usize = self.listeners.values().map(Vec::len).sum();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("listeners", &listeners)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            listeners: HashMap::new(),
            next_listener: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the document has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Create a detached element with the given tag.
    pub fn create(&mut self, tag: impl Into<Str>) -> ElementId {
        let tag = tag.into();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Element::new(generation, tag));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Element::new(generation, tag)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices."
        )]
        let idx = idx as u32;
        ElementId::new(idx, generation)
    }

    /// Create a detached element and apply attributes and inline styles to it.
    ///
    /// Keys are forwarded as-is; nothing is validated.
    pub fn create_with<K, V, S, T>(
        &mut self,
        tag: impl Into<Str>,
        attributes: impl IntoIterator<Item = (K, V)>,
        style: impl IntoIterator<Item = (S, T)>,
    ) -> ElementId
    where
        K: Into<Str>,
        V: Into<Str>,
        S: Into<Str>,
        T: Into<Str>,
    {
        let id = self.create(tag);
        if let Some(el) = self.node_mut(id) {
            el.attributes
                .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
            el.style
                .extend(style.into_iter().map(|(k, v)| (k.into(), v.into())));
        }
        id
    }

    /// Create a detached text node.
    pub fn text(&mut self, text: impl Into<Str>) -> ElementId {
        let id = self.create(TEXT_TAG);
        if let Some(el) = self.node_mut(id) {
            el.text = Some(text.into());
        }
        id
    }

    /// Create a detached placeholder node carrying a host handle.
    pub fn raw(&mut self, handle: RawHandle) -> ElementId {
        let id = self.create(RAW_TAG);
        if let Some(el) = self.node_mut(id) {
            el.raw = Some(handle);
        }
        id
    }

    /// Turn `content` into an element id, creating a node for text and raw handles.
    pub fn materialize(&mut self, content: impl Into<Content>) -> Result<ElementId, DomError> {
        match content.into() {
            Content::Text(text) => Ok(self.text(text)),
            Content::Element(id) => {
                if self.is_alive(id) {
                    Ok(id)
                } else {
                    Err(DomError::StaleElement(id))
                }
            }
            Content::Raw(handle) => Ok(self.raw(handle)),
        }
    }

    /// Tag of a live element.
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|el| el.tag.as_ref())
    }

    /// Host handle of a node created from [`Content::Raw`].
    pub fn raw_handle(&self, id: ElementId) -> Option<RawHandle> {
        self.node(id).and_then(|el| el.raw)
    }

    /// Parent of a live element.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|el| el.parent)
    }

    /// Children of a live element in order; empty for stale ids.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map_or(&[], |el| el.children.as_slice())
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        core::iter::successors(self.parent_of(id), move |p| self.parent_of(*p))
    }

    /// Append `child` as the last child of `parent`, returning the inserted id.
    ///
    /// An element that already has a parent is moved.
    pub fn append(
        &mut self,
        parent: ElementId,
        child: impl Into<Content>,
    ) -> Result<ElementId, DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend(
        &mut self,
        parent: ElementId,
        child: impl Into<Content>,
    ) -> Result<ElementId, DomError> {
        let first = self.children_of(parent).first().copied();
        self.insert_before(parent, child, first)
    }

    /// Insert `child` under `parent` before `reference`, or at the end when `reference` is `None`.
    pub fn insert_before(
        &mut self,
        parent: ElementId,
        child: impl Into<Content>,
        reference: Option<ElementId>,
    ) -> Result<ElementId, DomError> {
        self.live(parent)?;
        if let Some(r) = reference
            && self.parent_of(r) != Some(parent)
        {
            return Err(DomError::NotAChild {
                parent,
                reference: r,
            });
        }
        let child = self.materialize(child)?;
        if reference == Some(child) {
            return Ok(child);
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::Cycle { parent, child });
        }
        self.unlink(child);
        let el = self.live_mut(parent)?;
        let at = reference
            .and_then(|r| el.children.iter().position(|c| *c == r))
            .unwrap_or(el.children.len());
        el.children.insert(at, child);
        self.live_mut(child)?.parent = Some(parent);
        Ok(child)
    }

    /// Detach `id` from its parent, keeping it (and its subtree) alive.
    pub fn detach(&mut self, id: ElementId) -> Result<(), DomError> {
        self.live(id)?;
        self.unlink(id);
        Ok(())
    }

    /// Remove an element and its subtree, dropping their listeners.
    ///
    /// Ids into the removed subtree become stale.
    pub fn remove(&mut self, id: ElementId) -> Result<(), DomError> {
        self.live(id)?;
        self.unlink(id);
        let mut stack = alloc::vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.nodes[next.idx()].take() {
                stack.extend(el.children);
            }
            self.listeners.remove(&next);
            self.free_list.push(next.idx());
        }
        Ok(())
    }

    /// Remove every child of `parent`.
    pub fn clear_children(&mut self, parent: ElementId) -> Result<(), DomError> {
        let children = self.live(parent)?.children.clone();
        for child in children {
            self.remove(child)?;
        }
        Ok(())
    }

    /// Replace the children of `parent` with `children`, in order.
    ///
    /// Existing children that reappear in `children` are kept alive and moved;
    /// the rest are removed. Incoming elements are validated first, so on error
    /// the existing children are left untouched.
    pub fn replace_children<I>(&mut self, parent: ElementId, children: I) -> Result<(), DomError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.live(parent)?;
        let contents: Vec<Content> = children.into_iter().map(Into::into).collect();
        for content in &contents {
            if let Content::Element(child) = *content {
                self.live(child)?;
                if child == parent || self.ancestors(parent).any(|a| a == child) {
                    return Err(DomError::Cycle { parent, child });
                }
            }
        }
        let mut incoming = Vec::with_capacity(contents.len());
        for content in contents {
            let id = self.materialize(content)?;
            self.unlink_if_child(parent, id);
            incoming.push(id);
        }
        self.clear_children(parent)?;
        for id in incoming {
            self.append(parent, id)?;
        }
        Ok(())
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<Str>,
        value: impl Into<Str>,
    ) -> Result<(), DomError> {
        self.live_mut(id)?
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    /// Value of an attribute.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)?.attributes.get(name).map(AsRef::as_ref)
    }

    /// Whether an attribute is present.
    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<Option<Str>, DomError> {
        Ok(self.live_mut(id)?.attributes.remove(name))
    }

    /// Set an inline style property.
    pub fn set_style(
        &mut self,
        id: ElementId,
        property: impl Into<Str>,
        value: impl Into<Str>,
    ) -> Result<(), DomError> {
        self.live_mut(id)?
            .style
            .insert(property.into(), value.into());
        Ok(())
    }

    /// Value of an inline style property.
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.node(id)?.style.get(property).map(AsRef::as_ref)
    }

    /// Remove an inline style property, returning its previous value.
    pub fn remove_style(&mut self, id: ElementId, property: &str) -> Result<Option<Str>, DomError> {
        Ok(self.live_mut(id)?.style.remove(property))
    }

    /// Add a class marker. Returns `true` if it was not already present.
    pub fn add_class(&mut self, id: ElementId, class: impl Into<Str>) -> Result<bool, DomError> {
        let class = class.into();
        let el = self.live_mut(id)?;
        if el.classes.contains(&class) {
            return Ok(false);
        }
        el.classes.push(class);
        Ok(true)
    }

    /// Remove a class marker. Returns `true` if it was present.
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> Result<bool, DomError> {
        let el = self.live_mut(id)?;
        let before = el.classes.len();
        el.classes.retain(|c| c != class);
        Ok(el.classes.len() != before)
    }

    /// Force a class marker on or off. Returns `true` if anything changed.
    pub fn toggle_class(
        &mut self,
        id: ElementId,
        class: impl Into<Str>,
        on: bool,
    ) -> Result<bool, DomError> {
        let class = class.into();
        if on {
            self.add_class(id, class)
        } else {
            self.remove_class(id, &class)
        }
    }

    /// Whether an element carries a class marker.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    /// Class markers of an element in insertion order; empty for stale ids.
    pub fn classes(&self, id: ElementId) -> &[Str] {
        self.node(id).map_or(&[], |el| el.classes.as_slice())
    }

    /// Replace the element's children with its own text.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<Str>) -> Result<(), DomError> {
        self.clear_children(id)?;
        self.live_mut(id)?.text = Some(text.into());
        Ok(())
    }

    /// Drop the element's own text, returning it.
    pub fn clear_text(&mut self, id: ElementId) -> Result<Option<Str>, DomError> {
        Ok(self.live_mut(id)?.text.take())
    }

    /// The element's own text, not including descendants.
    pub fn text_of(&self, id: ElementId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    /// Concatenated text of an element and its descendants in tree order.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Record the measured bounds of an element, in viewport coordinates.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) -> Result<(), DomError> {
        self.live_mut(id)?.bounds = bounds;
        Ok(())
    }

    /// Measured bounds of an element; [`Rect::ZERO`] until the host reports them.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.node(id).map(|el| el.bounds)
    }

    /// Register `handler` for events of `event_type` reaching `target`.
    pub fn add_listener(
        &mut self,
        target: ElementId,
        event_type: impl Into<Str>,
        handler: impl FnMut(&Event) -> Outcome + 'static,
    ) -> Result<ListenerId, DomError> {
        self.live(target)?;
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.entry(target).or_default().push(Listener {
            id,
            event_type: event_type.into(),
            handler: Box::new(handler),
        });
        Ok(id)
    }

    /// Unregister a listener. Returns `false` if it was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(pos) = list.iter().position(|l| l.id == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Synchronously deliver `event` to its target, then to each ancestor.
    ///
    /// Returns the element at which a listener stopped propagation, if any.
    pub fn dispatch(&mut self, mut event: Event) -> Result<Option<ElementId>, DomError> {
        let target = event.target;
        self.live(target)?;
        let path: SmallVec<[ElementId; 8]> = core::iter::once(target)
            .chain(self.ancestors(target))
            .collect();
        let listeners = &mut self.listeners;
        let stopped = run(path.as_slice(), &mut event, |node, event| {
            event.current_target = *node;
            let event: &Event = event;
            let Some(list) = listeners.get_mut(node) else {
                return Outcome::Continue;
            };
            for l in list.iter_mut().filter(|l| l.event_type == event.event_type) {
                if (l.handler)(event) == Outcome::Stop {
                    return Outcome::Stop;
                }
            }
            Outcome::Continue
        });
        tracing::trace!(event = %event.event_type, ?target, ?stopped, "dispatched");
        Ok(stopped.copied())
    }

    fn node(&self, id: ElementId) -> Option<&Element> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|el| el.generation == id.generation())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes
            .get_mut(id.idx())?
            .as_mut()
            .filter(|el| el.generation == id.generation())
    }

    fn live(&self, id: ElementId) -> Result<&Element, DomError> {
        self.node(id).ok_or(DomError::StaleElement(id))
    }

    fn live_mut(&mut self, id: ElementId) -> Result<&mut Element, DomError> {
        self.node_mut(id).ok_or(DomError::StaleElement(id))
    }

    fn unlink(&mut self, id: ElementId) {
        let Some(parent) = self.node_mut(id).and_then(|el| el.parent.take()) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
    }

    fn unlink_if_child(&mut self, parent: ElementId, id: ElementId) {
        if self.parent_of(id) == Some(parent) {
            self.unlink(id);
        }
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(el) = self.node(id) else {
            return;
        };
        if let Some(text) = &el.text {
            out.push_str(text);
        }
        for child in &el.children {
            self.collect_text(*child, out);
        }
    }
}
