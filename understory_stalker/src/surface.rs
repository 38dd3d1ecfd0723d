// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document seam: what a controller reads from and writes to its host.

use kurbo::Rect;

/// A host document a [`Stalker`](crate::Stalker) can drive.
///
/// Implementations exist behind feature flags in [`adapters`](crate::adapters).
/// All geometry is in page coordinates: `y` grows downwards from the top of the
/// document, and the scroll offset is the page `y` at the top of the viewport.
///
/// Mutations on elements the surface no longer knows should be ignored.
pub trait Surface {
    /// Element handle. Compared by identity.
    type Element: Copy + Eq + core::fmt::Debug;

    /// Current vertical scroll offset.
    fn scroll_top(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Page-space border box of an element: offset, width, and outer height.
    ///
    /// Returns `None` if the element is not currently part of the document.
    fn page_bounds(&self, element: Self::Element) -> Option<Rect>;

    /// Set one inline style declaration.
    fn set_style(&mut self, element: Self::Element, property: &str, value: &str);

    /// Attach a class.
    fn add_class(&mut self, element: Self::Element, class: &str);

    /// Create a detached copy of an element's own attributes and styles, without descendants.
    fn clone_shallow(&mut self, element: Self::Element) -> Option<Self::Element>;

    /// Insert `element` immediately before `reference`, moving it if already placed.
    fn insert_before(&mut self, reference: Self::Element, element: Self::Element);

    /// Take `old`'s place in the document with `new`; `old` ends up detached.
    fn replace_with(&mut self, old: Self::Element, new: Self::Element);

    /// Remove an element from the document, keeping it (and its children) usable.
    fn detach(&mut self, element: Self::Element);

    /// Move all children of `from` to the end of `to`.
    fn move_children(&mut self, from: Self::Element, to: Self::Element);

    /// Discard an element for good.
    fn discard(&mut self, element: Self::Element);
}
