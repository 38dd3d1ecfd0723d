// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configure a stalker from JSON.
//!
//! A "call to action" bar sits low on a long page. Configured with `direction: up`,
//! it sticks to the bottom of the viewport until the user scrolls far enough to see
//! it in place. The stalking look comes from a class rule, and the activation is
//! delayed by 150ms, driven here by timer ticks.
//!
//! Run (set `RUST_LOG=understory_stalker=debug` to see transitions):
//! - `cargo run -p understory_demos --example stalker_config`

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_flow_tree::{Document, Element, Style};
use understory_stalker::{Config, Direction, Options, Signal, Stalkers};

const CONFIG: &str = r#"{
    "direction": "up",
    "offset": 8,
    "stalker_style": "cta-floating",
    "delay": 150,
    "comment": "unknown keys are ignored"
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: Config = match serde_json::from_str(CONFIG) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid stalker config: {e}");
            std::process::exit(1);
        }
    };
    assert_eq!(config.direction, Direction::Up);
    println!("== Config ==\n  {config:?}");

    let mut doc = Document::new(Size::new(1280.0, 720.0));
    doc.define_class(
        "cta-floating",
        Style::new().with("background", "gold").with("height", "64px"),
    );
    let root = doc.root();
    let _article = doc.append(root, Element::new("article").with_content_height(1500.0));
    let cta = doc.append(
        root,
        Element::new("aside")
            .with_content_height(80.0)
            .with_style("margin-left", "40px"),
    );
    let _footer = doc.append(root, Element::new("footer").with_content_height(400.0));

    let mut stalkers = Stalkers::new();
    stalkers.attach(&mut doc, [cta], &Options::from(config), 0);
    let stalker = stalkers.get(cta).unwrap();
    assert!(stalker.is_stalking());
    assert!(stalker.is_activation_pending());
    println!("== Attached ==\n  pending activation, bounds {:?}", doc.page_bounds(cta));

    // The timer fires 150ms after attachment.
    for now in [50, 100, 150] {
        stalkers.dispatch(&mut doc, Signal::Tick, now);
    }
    let bounds = doc.page_bounds(cta).unwrap();
    println!("== After 150ms ==\n  floating bounds {bounds:?}");
    assert_eq!(bounds.y0, 720.0 - 8.0 - 64.0);
    assert_eq!(bounds.x0, 40.0);

    // Scroll until the original slot (1500..1580) is fully visible.
    doc.scroll_to(900.0);
    let transitions = stalkers.dispatch(&mut doc, Signal::Scroll, 400);
    println!("== Scrolled to 900 ==\n  {transitions:?}");
    assert_eq!(transitions.len(), 1);
    let restored = stalkers.iter().next().unwrap().element();
    assert_eq!(
        doc.page_bounds(restored).map(|r| (r.y0, r.height())),
        Some((1500.0, 80.0))
    );
    assert!(!doc.element(restored).unwrap().has_class("cta-floating"));
}
