// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stalker basics.
//!
//! A navigation bar 500px down the page follows the user once they scroll past it,
//! pinned 10px below the top of the viewport, and returns when they scroll back.
//!
//! Run:
//! - `cargo run -p understory_demos --example stalker_basics`

use kurbo::{Rect, Size};
use understory_flow_tree::{Document, Element, ElementId};
use understory_stalker::{Options, Signal, Stalkers, Transition};

fn main() {
    let mut doc = Document::new(Size::new(1024.0, 800.0));
    let root = doc.root();
    let _header = doc.append(root, Element::new("header").with_content_height(500.0));
    let nav = doc.append(root, Element::new("nav"));
    let _links = doc.append(nav, Element::new("ul").with_content_height(50.0));
    let _main = doc.append(root, Element::new("main").with_content_height(3000.0));

    let mut stalkers = Stalkers::new();
    let options = Options::<ElementId>::new()
        .offset(10)
        .on_start(|el| println!("  start: {el:?}"))
        .on_stop(|el| println!("  stop:  {el:?}"));
    stalkers.attach(&mut doc, [nav], &options, 0);

    for (now, y) in [(16, 200.0), (32, 501.0), (48, 900.0), (64, 499.0)] {
        doc.scroll_to(y);
        let transitions = stalkers.dispatch(&mut doc, Signal::Scroll, now);
        let tracked = stalkers.iter().next().unwrap().element();
        println!(
            "== scroll_top {y} ==\n  transitions: {transitions:?}\n  nav bounds: {:?}",
            doc.page_bounds(tracked)
        );
        if y == 501.0 {
            assert_eq!(transitions, [(nav, Transition::Started)]);
            assert_eq!(
                doc.page_bounds(nav),
                Some(Rect::new(0.0, 511.0, 1024.0, 561.0))
            );
        } else if y == 499.0 {
            assert_eq!(transitions.len(), 1);
            assert_eq!(
                doc.page_bounds(tracked),
                Some(Rect::new(0.0, 500.0, 1024.0, 550.0))
            );
        }
    }
}
