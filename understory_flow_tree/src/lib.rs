// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_flow_tree --heading-base-level=0

//! Understory Flow Tree: a small retained document with block flow and a scrolled viewport.
//!
//! Understory Flow Tree models just enough of a page for scroll-driven widgets to be driven and observed:
//!
//! - A hierarchy of block elements with generational ids, inline styles, and classes.
//! - A class rule table applied beneath inline styles.
//! - Vertical block flow, `margin-left`, explicit `width`/`height`, and `position: fixed`
//!   with viewport-relative `top`/`bottom`/`left`.
//! - A viewport size and a clamped vertical scroll offset.
//!
//! ## Not a layout engine
//!
//! There is no inline layout, no horizontal scrolling, no percentages, and no padding or borders.
//! Geometry is recomputed on query; documents are expected to be small.
//!
//! ## API overview
//!
//! - [`Document`]: owns elements, class rules, viewport and scroll state.
//! - [`Element`]: per-element data (tag, content height, inline style, classes).
//! - [`Style`]: ordered declarations with pixel parsing helpers.
//! - [`ElementId`]: generational handle of an element.
//!
//! Key operations:
//! - [`Document::append`] / [`Document::create`] → [`ElementId`]
//! - [`Document::insert_before`], [`Document::replace_with`], [`Document::detach`], [`Document::move_children`]
//! - [`Document::set_style`] / [`Document::add_class`] / [`Document::define_class`]
//! - [`Document::page_bounds`] and [`Document::scroll_to`]
//!
//! ## Minimal usage
//!
//! ```
//! use understory_flow_tree::{Document, Element};
//! use kurbo::{Rect, Size};
//!
//! let mut doc = Document::new(Size::new(800.0, 600.0));
//! let root = doc.root();
//! let header = doc.append(root, Element::new("header").with_content_height(120.0));
//! let nav = doc.append(root, Element::new("nav").with_content_height(40.0));
//! let _main = doc.append(root, Element::new("main").with_content_height(3000.0));
//!
//! assert_eq!(doc.page_bounds(nav), Some(Rect::new(0.0, 120.0, 800.0, 160.0)));
//!
//! // Pin the nav bar to the top of the viewport; it leaves the flow.
//! doc.scroll_to(500.0);
//! doc.set_style(nav, "position", "fixed");
//! doc.set_style(nav, "top", "0px");
//! assert_eq!(doc.page_bounds(nav).map(|r| r.y0), Some(500.0));
//! # let _ = header;
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod types;

pub use document::Document;
pub use types::{Element, ElementId, Position, Style, parse_px};
