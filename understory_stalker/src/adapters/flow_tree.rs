// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Surface`] implementation for Understory Flow Tree.
//!
//! ## Feature
//!
//! Enable with `flow_tree_adapter`.
//!
//! ## Notes
//!
//! Element handles are [`ElementId`]s. Discarding an element removes it from
//! the document and frees its id, so the handle of an element replaced by its
//! pristine clone goes stale.

use kurbo::Rect;
use understory_flow_tree::{Document, ElementId};

use crate::surface::Surface;

impl Surface for Document {
    type Element = ElementId;

    fn scroll_top(&self) -> f64 {
        Document::scroll_top(self)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport().height
    }

    fn page_bounds(&self, element: ElementId) -> Option<Rect> {
        Document::page_bounds(self, element)
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        Document::set_style(self, element, property, value);
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        Document::add_class(self, element, class);
    }

    fn clone_shallow(&mut self, element: ElementId) -> Option<ElementId> {
        Document::clone_shallow(self, element)
    }

    fn insert_before(&mut self, reference: ElementId, element: ElementId) {
        Document::insert_before(self, reference, element);
    }

    fn replace_with(&mut self, old: ElementId, new: ElementId) {
        Document::replace_with(self, old, new);
    }

    fn detach(&mut self, element: ElementId) {
        Document::detach(self, element);
    }

    fn move_children(&mut self, from: ElementId, to: ElementId) {
        Document::move_children(self, from, to);
    }

    fn discard(&mut self, element: ElementId) {
        Document::remove(self, element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use understory_flow_tree::Element;

    #[test]
    fn surface_reads_match_document() {
        let mut doc = Document::new(Size::new(640.0, 480.0));
        let root = doc.root();
        let a = doc.append(root, Element::new("a").with_content_height(1000.0));
        doc.scroll_to(120.0);
        let s: &dyn Surface<Element = ElementId> = &doc;
        assert_eq!(s.scroll_top(), 120.0);
        assert_eq!(s.viewport_height(), 480.0);
        assert_eq!(s.page_bounds(a), Some(Rect::new(0.0, 0.0, 640.0, 1000.0)));
    }

    #[test]
    fn discard_frees_the_id() {
        let mut doc = Document::new(Size::new(640.0, 480.0));
        let root = doc.root();
        let a = doc.append(root, Element::new("a"));
        Surface::discard(&mut doc, a);
        assert!(!doc.is_alive(a));
        assert!(Surface::clone_shallow(&mut doc, a).is_none());
    }
}
