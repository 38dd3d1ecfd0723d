// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stalking controller: one state machine per tracked element.
//!
//! ## States
//!
//! - Resting: the element sits in normal flow. Its baseline geometry is read from the element.
//! - Stalking: the element is fixed to a viewport edge and a placeholder of the same outer
//!   height holds its slot. The baseline is read from the placeholder.
//!
//! Only [`Stalker::handle`] moves between states.
//!
//! ## Delayed activation
//!
//! With a non-zero delay, the stalking state is entered immediately (and the start
//! callback fires) but the visual change is scheduled for `now + delay`. The pending
//! activation is a single slot owned by the controller: ending the stalk before it
//! fires cancels it and leaves the element untouched.
//!
//! ## Restoration
//!
//! Starting a stalk snapshots a shallow clone of the element. Stopping moves the live
//! element's children into that clone, swaps it in for the placeholder, and discards the
//! styled element. From then on [`Stalker::element`] reports the clone.

use alloc::string::ToString;
use kurbo::Rect;

use crate::options::Options;
use crate::style::{StalkerStyle, StyleMap, px};
use crate::surface::Surface;
use crate::threshold::{ScrollState, should_stalk};
use crate::types::{Edge, Millis, STALKER_Z_INDEX, Signal};

/// State change produced by an evaluation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Resting → Stalking.
    Started,
    /// Stalking → Resting.
    Stopped,
}

/// Placement of a stalking element along its edge.
///
/// `from` is the offset that puts the element just outside the viewport, `to` the
/// configured resting offset. Only `to` is applied; `from` is there for hosts that
/// animate the entrance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slide {
    /// Edge the element is pinned to.
    pub edge: Edge,
    /// Entry offset in pixels: minus the element's outer height.
    pub from: f64,
    /// Final offset in pixels.
    pub to: f64,
}

impl Slide {
    /// `{position: fixed, <edge>: from}`.
    pub fn initial_style(&self) -> StyleMap {
        StyleMap::new()
            .with("position", "fixed")
            .with(self.edge.property(), &px(self.from))
    }

    /// `{position: fixed, <edge>: to}`.
    pub fn ending_style(&self) -> StyleMap {
        StyleMap::new()
            .with("position", "fixed")
            .with(self.edge.property(), &px(self.to))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Activation {
    Pending { due: Millis },
    Applied,
}

#[derive(Copy, Clone, Debug)]
enum State<K> {
    Resting,
    Stalking {
        slide: Slide,
        pristine: K,
        activation: Activation,
    },
}

/// Scroll-following controller for a single element.
#[derive(Debug)]
pub struct Stalker<K> {
    element: K,
    options: Options<K>,
    baseline: Rect,
    placeholder: K,
    state: State<K>,
}

impl<K: Copy + Eq + core::fmt::Debug> Stalker<K> {
    /// Start tracking `element`.
    ///
    /// Captures the baseline geometry, prepares a detached placeholder of the
    /// element's outer height, and runs one evaluation (which may start stalking
    /// right away). Returns `None` if the element is not part of the document.
    pub fn new<S>(surface: &mut S, element: K, options: Options<K>, now: Millis) -> Option<Self>
    where
        S: Surface<Element = K>,
    {
        let baseline = surface.page_bounds(element)?;
        let placeholder = surface.clone_shallow(element)?;
        surface.set_style(placeholder, "height", &px(baseline.height()));
        tracing::debug!(
            ?element,
            direction = %options.config.direction,
            offset = options.config.offset,
            delay = options.config.delay,
            "stalker attached"
        );
        let mut stalker = Self {
            element,
            options,
            baseline,
            placeholder,
            state: State::Resting,
        };
        stalker.stalk(surface, now);
        Some(stalker)
    }

    /// The tracked element. Changes to the restored clone after every stop.
    pub fn element(&self) -> K {
        self.element
    }

    /// The placeholder element; attached only while stalking is active.
    pub fn placeholder(&self) -> K {
        self.placeholder
    }

    /// Baseline geometry from the latest evaluation.
    pub fn baseline(&self) -> Rect {
        self.baseline
    }

    /// Options this controller was created with.
    pub fn options(&self) -> &Options<K> {
        &self.options
    }

    /// Returns true between a start and the matching stop, including while the
    /// activation is still pending.
    pub fn is_stalking(&self) -> bool {
        matches!(self.state, State::Stalking { .. })
    }

    /// Returns true while a delayed activation has not fired yet.
    pub fn is_activation_pending(&self) -> bool {
        matches!(
            self.state,
            State::Stalking {
                activation: Activation::Pending { .. },
                ..
            }
        )
    }

    /// Placement data of the current stalk, if any.
    pub fn slide(&self) -> Option<Slide> {
        match self.state {
            State::Stalking { slide, .. } => Some(slide),
            State::Resting => None,
        }
    }

    /// React to a global signal.
    ///
    /// A due delayed activation fires first. Scroll and resize then refresh the
    /// baseline and apply the threshold rule; `Tick` does nothing else.
    pub fn handle<S>(&mut self, surface: &mut S, signal: Signal, now: Millis) -> Option<Transition>
    where
        S: Surface<Element = K>,
    {
        self.advance(surface, now);
        match signal {
            Signal::Tick => None,
            Signal::Scroll | Signal::Resize => {
                self.refresh_baseline(surface);
                self.stalk(surface, now)
            }
        }
    }

    /// Fire the pending activation if it is due. Returns true if it fired.
    pub fn advance<S>(&mut self, surface: &mut S, now: Millis) -> bool
    where
        S: Surface<Element = K>,
    {
        let State::Stalking {
            slide,
            pristine,
            activation: Activation::Pending { due },
        } = self.state
        else {
            return false;
        };
        if now < due {
            return false;
        }
        self.activate(surface, slide);
        self.state = State::Stalking {
            slide,
            pristine,
            activation: Activation::Applied,
        };
        true
    }

    /// Stop tracking. An active stalk is ended first (firing the stop callback)
    /// and the placeholder is discarded. Returns the element left in the document.
    pub fn release<S>(mut self, surface: &mut S) -> K
    where
        S: Surface<Element = K>,
    {
        if self.is_stalking() {
            self.end(surface);
        }
        surface.discard(self.placeholder);
        tracing::debug!(element = ?self.element, "stalker released");
        self.element
    }

    fn refresh_baseline<S>(&mut self, surface: &mut S)
    where
        S: Surface<Element = K>,
    {
        match self.state {
            State::Stalking {
                activation: Activation::Applied,
                ..
            } => {
                let Some(slot) = surface.page_bounds(self.placeholder) else {
                    return;
                };
                let width = self
                    .options
                    .config
                    .stalker_style
                    .pinned_width()
                    .unwrap_or(slot.width());
                self.baseline = Rect::new(slot.x0, slot.y0, slot.x0 + width, slot.y1);
                // Keep the fixed element aligned with its slot across resize and zoom.
                surface.set_style(self.element, "width", &px(width));
                surface.set_style(self.element, "left", &px(slot.x0));
            }
            _ => {
                if let Some(bounds) = surface.page_bounds(self.element) {
                    self.baseline = bounds;
                }
            }
        }
    }

    fn stalk<S>(&mut self, surface: &mut S, now: Millis) -> Option<Transition>
    where
        S: Surface<Element = K>,
    {
        let scroll = ScrollState {
            scroll_top: surface.scroll_top(),
            viewport_height: surface.viewport_height(),
        };
        let outer_height = surface
            .page_bounds(self.element)
            .map_or(self.baseline.height(), |b| b.height());
        let wanted = should_stalk(
            self.options.config.direction,
            self.baseline,
            outer_height,
            scroll,
        );
        tracing::trace!(
            element = ?self.element,
            top = self.baseline.y0,
            scroll_top = scroll.scroll_top,
            wanted,
            stalking = self.is_stalking(),
            "evaluate"
        );
        match (wanted, self.is_stalking()) {
            (true, false) => self
                .begin(surface, outer_height, now)
                .then_some(Transition::Started),
            (false, true) => {
                self.end(surface);
                Some(Transition::Stopped)
            }
            _ => None,
        }
    }

    fn begin<S>(&mut self, surface: &mut S, outer_height: f64, now: Millis) -> bool
    where
        S: Surface<Element = K>,
    {
        let Some(pristine) = surface.clone_shallow(self.element) else {
            return false;
        };
        surface.set_style(self.placeholder, "height", &px(outer_height));

        let config = &self.options.config;
        let slide = Slide {
            edge: config.direction.edge(),
            from: -outer_height,
            to: f64::from(config.offset),
        };
        let delay = config.delay;
        if delay == 0 {
            self.state = State::Stalking {
                slide,
                pristine,
                activation: Activation::Applied,
            };
            self.activate(surface, slide);
        } else {
            // Replaces (and so cancels) any earlier pending activation.
            self.state = State::Stalking {
                slide,
                pristine,
                activation: Activation::Pending {
                    due: now.saturating_add(Millis::from(delay)),
                },
            };
        }
        tracing::debug!(element = ?self.element, edge = ?slide.edge, delay, "stalking started");

        if let Some(on_start) = &self.options.on_start {
            on_start(self.element);
        }
        true
    }

    fn activate<S>(&self, surface: &mut S, slide: Slide)
    where
        S: Surface<Element = K>,
    {
        let base = StyleMap::new()
            .with("width", &px(self.baseline.width()))
            .with("left", &px(self.baseline.x0))
            .with("z-index", &STALKER_Z_INDEX.to_string());
        match &self.options.config.stalker_style {
            StalkerStyle::Map(map) => apply(surface, self.element, &base.merged(map)),
            StalkerStyle::Class(class) => {
                apply(surface, self.element, &base);
                surface.add_class(self.element, class);
            }
        }
        surface.insert_before(self.element, self.placeholder);
        apply(surface, self.element, &slide.ending_style());
    }

    fn end<S>(&mut self, surface: &mut S)
    where
        S: Surface<Element = K>,
    {
        let State::Stalking {
            pristine,
            activation,
            ..
        } = self.state
        else {
            return;
        };
        match activation {
            Activation::Applied => {
                surface.detach(self.element);
                surface.move_children(self.element, pristine);
                surface.replace_with(self.placeholder, pristine);
                surface.discard(self.element);
                self.element = pristine;
            }
            Activation::Pending { due } => {
                tracing::debug!(element = ?self.element, due, "pending activation cancelled");
                surface.discard(pristine);
            }
        }
        self.state = State::Resting;
        tracing::debug!(element = ?self.element, "stalking stopped");

        if let Some(on_stop) = &self.options.on_stop {
            on_stop(self.element);
        }
    }
}

fn apply<S: Surface>(surface: &mut S, element: S::Element, style: &StyleMap) {
    for (property, value) in style.iter() {
        surface.set_style(element, property, value);
    }
}
