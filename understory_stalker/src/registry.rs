// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance registry: at most one controller per element, fed by global signals.
//!
//! ## Usage
//!
//! 1) [`Stalkers::attach`] a selection of elements with shared [`Options`].
//!    Elements already tracked are skipped.
//! 2) Forward every scroll, resize, and timer tick from the host to [`Stalkers::dispatch`].
//! 3) Optionally [`Stalkers::detach`] a single instance; the others keep running.
//!
//! Identity follows each controller's current element: after a stop swaps in the
//! restored clone, attaching that clone again is still a no-op.

use alloc::vec::Vec;

use crate::options::Options;
use crate::stalker::{Stalker, Transition};
use crate::surface::Surface;
use crate::types::{Millis, Signal};

/// Registry of stalking controllers keyed by element identity.
#[derive(Debug)]
pub struct Stalkers<K> {
    entries: Vec<Stalker<K>>,
}

impl<K> Default for Stalkers<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + core::fmt::Debug> Stalkers<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track every element of `elements` that is not tracked yet.
    ///
    /// Each new controller gets its own clone of `options` and runs one evaluation
    /// immediately. Elements that are not part of the document are skipped.
    /// Returns how many controllers were created.
    pub fn attach<S, I>(
        &mut self,
        surface: &mut S,
        elements: I,
        options: &Options<K>,
        now: Millis,
    ) -> usize
    where
        S: Surface<Element = K>,
        I: IntoIterator<Item = K>,
    {
        let mut created = 0;
        for element in elements {
            if self.contains(element) {
                tracing::trace!(?element, "already tracked");
                continue;
            }
            if let Some(stalker) = Stalker::new(surface, element, options.clone(), now) {
                self.entries.push(stalker);
                created += 1;
            }
        }
        created
    }

    /// Forward a signal to every controller in attachment order.
    ///
    /// Returns the transitions that happened, paired with the element each
    /// controller tracks afterwards.
    pub fn dispatch<S>(
        &mut self,
        surface: &mut S,
        signal: Signal,
        now: Millis,
    ) -> Vec<(K, Transition)>
    where
        S: Surface<Element = K>,
    {
        let mut out = Vec::new();
        for stalker in &mut self.entries {
            if let Some(t) = stalker.handle(surface, signal, now) {
                out.push((stalker.element(), t));
            }
        }
        out
    }

    /// Stop tracking `element`. Returns false if it was not tracked.
    ///
    /// A controller that is stalking is ended first, so the document is left in its resting layout.
    pub fn detach<S>(&mut self, surface: &mut S, element: K) -> bool
    where
        S: Surface<Element = K>,
    {
        let Some(i) = self.entries.iter().position(|s| s.element() == element) else {
            return false;
        };
        let stalker = self.entries.remove(i);
        stalker.release(surface);
        true
    }

    /// Returns true if a controller currently tracks `element`.
    pub fn contains(&self, element: K) -> bool {
        self.get(element).is_some()
    }

    /// Controller tracking `element`, if any.
    pub fn get(&self, element: K) -> Option<&Stalker<K>> {
        self.entries.iter().find(|s| s.element() == element)
    }

    /// Iterate controllers in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &Stalker<K>> {
        self.entries.iter()
    }

    /// Number of controllers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;
    use kurbo::Size;
    use understory_flow_tree::{Document, Element, ElementId};

    fn page() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new(Size::new(1000.0, 800.0));
        let root = doc.root();
        let _ = doc.append(root, Element::new("header").with_content_height(500.0));
        let a = doc.append(root, Element::new("nav").with_content_height(50.0));
        let _ = doc.append(root, Element::new("section").with_content_height(1000.0));
        let b = doc.append(root, Element::new("aside").with_content_height(50.0));
        let _ = doc.append(root, Element::new("main").with_content_height(2000.0));
        (doc, a, b)
    }

    #[test]
    fn attach_is_idempotent_per_element() {
        let (mut doc, a, b) = page();
        let starts = Rc::new(Cell::new(0));
        let counter = starts.clone();
        let opts = Options::new().on_start(move |_| counter.set(counter.get() + 1));
        let mut reg = Stalkers::new();
        assert_eq!(reg.attach(&mut doc, [a, b], &opts, 0), 2);
        assert_eq!(reg.attach(&mut doc, [a], &opts, 0), 0);
        assert_eq!(reg.attach(&mut doc, vec![b, a, b], &opts, 0), 0);
        assert_eq!(reg.len(), 2);

        doc.scroll_to(600.0);
        reg.dispatch(&mut doc, Signal::Scroll, 1);
        assert_eq!(starts.get(), 1, "one controller per element");
    }

    #[test]
    fn identity_follows_the_restored_clone() {
        let (mut doc, a, _b) = page();
        let mut reg = Stalkers::new();
        reg.attach(&mut doc, [a], &Options::new(), 0);
        doc.scroll_to(600.0);
        assert_eq!(
            reg.dispatch(&mut doc, Signal::Scroll, 1),
            [(a, Transition::Started)]
        );
        doc.scroll_to(0.0);
        let out = reg.dispatch(&mut doc, Signal::Scroll, 2);
        let clone = reg.iter().next().unwrap().element();
        assert_eq!(out, [(clone, Transition::Stopped)]);
        assert_ne!(clone, a);
        assert!(reg.contains(clone));
        assert!(!reg.contains(a));
        assert_eq!(reg.attach(&mut doc, [clone], &Options::new(), 3), 0);
    }

    #[test]
    fn instances_are_independent() {
        let (mut doc, a, b) = page();
        let mut reg = Stalkers::new();
        reg.attach(&mut doc, [a], &Options::new(), 0);
        reg.attach(&mut doc, [b], &Options::new().direction(Direction::Up), 0);
        // b's bottom (1600) is below the viewport from the start.
        assert!(reg.get(b).unwrap().is_stalking());
        assert!(!reg.get(a).unwrap().is_stalking());

        doc.scroll_to(900.0);
        let out = reg.dispatch(&mut doc, Signal::Scroll, 1);
        assert_eq!(out.len(), 2);
        assert!(reg.iter().any(|s| s.element() == a && s.is_stalking()));
        assert!(reg.iter().all(|s| s.element() != b));
    }

    #[test]
    fn detach_restores_resting_layout() {
        let (mut doc, a, b) = page();
        let mut reg = Stalkers::new();
        reg.attach(&mut doc, [a, b], &Options::new(), 0);
        doc.scroll_to(600.0);
        reg.dispatch(&mut doc, Signal::Scroll, 1);
        let stalking = reg.get(a).unwrap().element();
        assert!(reg.detach(&mut doc, stalking));
        assert!(!reg.detach(&mut doc, stalking));
        assert_eq!(reg.len(), 1);
        let restored = doc.children(doc.root())[1];
        assert_eq!(doc.page_bounds(restored).map(|r| r.y0), Some(500.0));
        assert_eq!(doc.children(doc.root()).len(), 5);
        assert!(!reg.is_empty());
    }

    #[test]
    fn unattached_elements_are_skipped() {
        let (mut doc, _a, _b) = page();
        let loose = doc.create(Element::new("div"));
        let mut reg = Stalkers::new();
        assert_eq!(reg.attach(&mut doc, [loose], &Options::new(), 0), 0);
        assert!(reg.is_empty());
    }
}
