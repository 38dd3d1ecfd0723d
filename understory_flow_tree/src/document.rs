// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, styles, layout queries, and scrolling.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::types::{Element, ElementId, Position, Style};

/// A retained document: a tree of block elements plus a scrolled viewport.
///
/// The document always has a root element (see [`Document::root`]). Elements
/// created with [`Document::create`] or removed from their parent with
/// [`Document::detach`] stay alive but are not laid out until they are
/// attached again.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: ElementId,
    rules: BTreeMap<String, Style>,
    viewport: Size,
    scroll_top: f64,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("rules", &self.rules.len())
            .field("viewport", &self.viewport)
            .field("scroll_top", &self.scroll_top)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    element: Element,
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        }
    }
}

impl Document {
    /// Create a document with an empty `body` root and the given viewport.
    pub fn new(viewport: Size) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: ElementId::new(0, 0),
            rules: BTreeMap::new(),
            viewport,
            scroll_top: 0.0,
        };
        doc.root = doc.alloc(Element::new("body"));
        doc
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    // --- structure ---

    /// Create a detached element.
    pub fn create(&mut self, element: Element) -> ElementId {
        self.alloc(element)
    }

    /// Create an element as the last child of `parent`.
    ///
    /// If `parent` is stale the element is created detached.
    pub fn append(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = self.alloc(element);
        self.append_child(parent, id);
        id
    }

    /// Move `child` (attached or not) to the end of `parent`'s children.
    ///
    /// Ignored if either id is stale or if `parent` lies inside `child`'s subtree.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.is_alive(parent) || !self.is_alive(child) || self.contains(child, parent) {
            return;
        }
        self.detach(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Insert `id` as the previous sibling of `reference`.
    ///
    /// `id` is first detached from wherever it was. Ignored when `reference`
    /// has no parent, when either id is stale, or when the move would create a cycle.
    pub fn insert_before(&mut self, reference: ElementId, id: ElementId) {
        if reference == id || !self.is_alive(id) {
            return;
        }
        let Some(parent) = self.parent(reference) else {
            return;
        };
        if self.contains(id, parent) {
            return;
        }
        self.detach(id);
        let siblings = &mut self.node_mut(parent).children;
        let at = siblings
            .iter()
            .position(|c| *c == reference)
            .unwrap_or(siblings.len());
        siblings.insert(at, id);
        self.node_mut(id).parent = Some(parent);
    }

    /// Put `new` where `old` is and detach `old`.
    pub fn replace_with(&mut self, old: ElementId, new: ElementId) {
        if old == new || self.parent(old).is_none() {
            return;
        }
        self.insert_before(old, new);
        if self.parent(new).is_some() {
            self.detach(old);
        }
    }

    /// Unlink `id` from its parent. The element and its subtree stay alive.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.parent(id) {
            self.node_mut(parent).children.retain(|c| *c != id);
            self.node_mut(id).parent = None;
        }
    }

    /// Move every child of `from` to the end of `to`, keeping their order.
    pub fn move_children(&mut self, from: ElementId, to: ElementId) {
        if from == to || !self.is_alive(from) || !self.is_alive(to) {
            return;
        }
        if self.contains(from, to) {
            tracing::debug!(?from, ?to, "move_children target inside source; ignored");
            return;
        }
        let children = core::mem::take(&mut self.node_mut(from).children);
        for child in &children {
            self.node_mut(*child).parent = Some(to);
        }
        self.node_mut(to).children.extend(children);
    }

    /// Remove an element and its subtree, freeing their ids. The root cannot be removed.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root || !self.is_alive(id) {
            return;
        }
        self.detach(id);
        self.free_subtree(id);
    }

    /// Copy an element's data (tag, content height, inline style, classes)
    /// into a new detached element without children.
    pub fn clone_shallow(&mut self, id: ElementId) -> Option<ElementId> {
        let element = self.element(id)?.clone();
        Some(self.alloc(element))
    }

    // --- styles ---

    /// Set an inline declaration.
    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.style.set(property, value);
        }
    }

    /// Remove an inline declaration.
    pub fn remove_style(&mut self, id: ElementId, property: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.style.remove(property);
        }
    }

    /// Add a class to an element.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.add_class(class);
        }
    }

    /// Remove a class from an element.
    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.classes.retain(|c| c != class);
        }
    }

    /// Define (or replace) the declarations applied by a class.
    pub fn define_class(&mut self, class: &str, style: Style) {
        self.rules.insert(class.to_string(), style);
    }

    /// Class rules in class order, then the inline style on top.
    pub fn computed_style(&self, id: ElementId) -> Option<Style> {
        let element = self.element(id)?;
        let mut style = Style::new();
        for class in &element.classes {
            if let Some(rule) = self.rules.get(class) {
                style.extend_from(rule);
            }
        }
        style.extend_from(&element.style);
        Some(style)
    }

    // --- queries ---

    /// Element data, if `id` is live.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Parent of `id`, if any.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node_opt(id)?.parent
    }

    /// Children of `id`; empty for stale ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns true if `id` is live and connected to the root.
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.is_alive(id) && self.contains(self.root, id)
    }

    /// Page-space border box of an attached element.
    ///
    /// The origin is the element's offset from the top-left of the document,
    /// the size is its width and outer height. Returns `None` for stale or
    /// detached elements.
    pub fn page_bounds(&self, id: ElementId) -> Option<Rect> {
        if !self.is_attached(id) {
            return None;
        }
        Some(self.layout_box(id))
    }

    /// Total height of the document.
    pub fn height(&self) -> f64 {
        self.outer_height(self.root)
    }

    // --- viewport ---

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport. The scroll position is clamped to the new range.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }

    /// Current vertical scroll offset, clamped to the scrollable range.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top.min(self.max_scroll_top())
    }

    /// Scroll to `y`, clamped to `[0, height - viewport height]`.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_top = y.clamp(0.0, self.max_scroll_top());
    }

    /// Largest valid scroll offset.
    pub fn max_scroll_top(&self) -> f64 {
        (self.height() - self.viewport.height).max(0.0)
    }

    // --- internals ---

    fn alloc(&mut self, element: Element) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        ElementId::new(idx, generation)
    }

    fn free_subtree(&mut self, id: ElementId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` is `ancestor` or lies below it.
    fn contains(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(p) => id = p,
                None => return false,
            }
        }
    }

    fn node_opt(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.node_opt_mut(id).expect("dangling ElementId")
    }

    fn in_flow(&self, id: ElementId) -> bool {
        self.computed_style(id)
            .is_some_and(|s| s.position() == Position::Static)
    }

    fn outer_height(&self, id: ElementId) -> f64 {
        let Some(style) = self.computed_style(id) else {
            return 0.0;
        };
        if let Some(h) = style.px("height") {
            return h;
        }
        let own = self.element(id).map_or(0.0, |e| e.content_height);
        own + self
            .children(id)
            .iter()
            .filter(|c| self.in_flow(**c))
            .map(|c| self.outer_height(*c))
            .sum::<f64>()
    }

    /// Border box of an attached element. Children stack from the top of their parent.
    fn layout_box(&self, id: ElementId) -> Rect {
        let height = self.outer_height(id);
        let Some(parent) = self.parent(id) else {
            return Rect::new(0.0, 0.0, self.viewport.width, height);
        };
        let container = self.layout_box(parent);
        let style = self.computed_style(id).unwrap_or_default();

        let mut static_y = container.y0;
        for sibling in self.children(parent) {
            if *sibling == id {
                break;
            }
            if self.in_flow(*sibling) {
                static_y += self.outer_height(*sibling);
            }
        }

        let margin = style.px("margin-left").unwrap_or(0.0);
        let width = style
            .px("width")
            .unwrap_or((container.width() - margin).max(0.0));

        let (x, y) = match style.position() {
            Position::Static => (container.x0 + margin, static_y),
            Position::Fixed => {
                let x = style.px("left").unwrap_or(container.x0 + margin);
                let y = if let Some(top) = style.px("top") {
                    self.scroll_top() + top
                } else if let Some(bottom) = style.px("bottom") {
                    self.scroll_top() + self.viewport.height - bottom - height
                } else {
                    static_y
                };
                (x, y)
            }
        };
        Rect::new(x, y, x + width, y + height)
    }
}
