// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stalker --heading-base-level=0

//! Understory Stalker: elements that follow the user along the page in one scroll direction.
//!
//! ## Overview
//!
//! A [`Stalker`] tracks one element. While the user is scrolled past the element's
//! original position it switches the element to a fixed position at a viewport edge
//! ("stalking"), with a placeholder holding its slot in the flow. When the user scrolls
//! back it restores the element exactly as it was.
//!
//! - [`Direction::Down`]: stalk once the viewport top passes the element's original top;
//!   the element is pinned to the top edge.
//! - [`Direction::Up`]: stalk while the element's original bottom is below the viewport;
//!   the element is pinned to the bottom edge.
//!
//! ## Inputs
//!
//! The controller does not own a document or a clock. It drives any [`Surface`] (for
//! example an Understory Flow Tree document via the `flow_tree_adapter` feature) and
//! receives a [`Millis`] timestamp with every [`Signal`].
//!
//! ## Workflow
//!
//! 1) Build [`Options`]: direction, offset, a style map or class applied while stalking,
//!    an activation delay, and optional start/stop callbacks.
//! 2) Attach elements through a [`Stalkers`] registry; attaching twice is a no-op.
//! 3) Forward host scroll, resize and timer ticks to [`Stalkers::dispatch`].
//!
//! ## Threshold rule
//!
//! ```
//! use kurbo::Rect;
//! use understory_stalker::{Direction, ScrollState, should_stalk};
//!
//! let resting = Rect::new(0.0, 500.0, 300.0, 550.0);
//! let at = |scroll_top| ScrollState { scroll_top, viewport_height: 800.0 };
//! assert!(!should_stalk(Direction::Down, resting, 50.0, at(499.0)));
//! assert!(should_stalk(Direction::Down, resting, 50.0, at(501.0)));
//! ```
//!
//! ## Restoration
//!
//! Stopping swaps a pristine clone (taken when the stalk started) in for the placeholder
//! and moves the live children into it. Any styles or classes applied while stalking are
//! discarded with the old element, and [`Stalker::element`] reports the clone from then on.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod options;
pub mod registry;
pub mod stalker;
pub mod style;
pub mod surface;
pub mod threshold;
pub mod types;

pub use options::{Callback, Config, Options};
pub use registry::Stalkers;
pub use stalker::{Slide, Stalker, Transition};
pub use style::{StalkerStyle, StyleMap};
pub use surface::Surface;
pub use threshold::{ScrollState, should_stalk};
pub use types::{Direction, Edge, Millis, ParseDirectionError, STALKER_Z_INDEX, Signal};
