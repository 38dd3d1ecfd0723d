// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The threshold rule deciding whether an element should be stalking.

use kurbo::Rect;

use crate::types::Direction;

/// Scroll state sampled from the host for one evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollState {
    /// Page `y` at the top of the viewport.
    pub scroll_top: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

impl ScrollState {
    /// Page `y` at the bottom of the viewport.
    pub fn scroll_bottom(&self) -> f64 {
        self.scroll_top + self.viewport_height
    }
}

/// Returns true when an element whose resting geometry is `baseline` should stalk.
///
/// - [`Direction::Down`]: once the viewport top has passed the element's original top.
/// - [`Direction::Up`]: while the element's original bottom edge
///   (`baseline.y0 + outer_height`) lies below the viewport bottom.
///
/// `outer_height` is the tracked element's current outer height; it can differ
/// from `baseline.height()` when the stalking style changes the element's size.
pub fn should_stalk(
    direction: Direction,
    baseline: Rect,
    outer_height: f64,
    scroll: ScrollState,
) -> bool {
    match direction {
        Direction::Down => baseline.y0 < scroll.scroll_top,
        Direction::Up => baseline.y0 + outer_height > scroll.scroll_bottom(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64, height: f64) -> Rect {
        Rect::new(0.0, top, 300.0, top + height)
    }

    fn scroll(scroll_top: f64, viewport_height: f64) -> ScrollState {
        ScrollState {
            scroll_top,
            viewport_height,
        }
    }

    #[test]
    fn down_triggers_strictly_past_top() {
        let b = at(500.0, 50.0);
        assert!(!should_stalk(Direction::Down, b, 50.0, scroll(499.0, 800.0)));
        assert!(!should_stalk(Direction::Down, b, 50.0, scroll(500.0, 800.0)));
        assert!(should_stalk(Direction::Down, b, 50.0, scroll(501.0, 800.0)));
    }

    #[test]
    fn up_triggers_while_bottom_is_below_viewport() {
        let b = at(500.0, 50.0);
        // Bottom edge 550 against a 260px viewport at the top of the page.
        assert!(should_stalk(Direction::Up, b, 50.0, scroll(0.0, 260.0)));
        // 290 + 260 = 550: bottom edge exactly at the viewport bottom is visible.
        assert!(!should_stalk(Direction::Up, b, 50.0, scroll(290.0, 260.0)));
        assert!(should_stalk(Direction::Up, b, 50.0, scroll(289.0, 260.0)));
        // A tall viewport shows the whole element.
        assert!(!should_stalk(Direction::Up, b, 50.0, scroll(0.0, 800.0)));
    }

    #[test]
    fn up_uses_live_outer_height() {
        let b = at(500.0, 50.0);
        assert!(!should_stalk(Direction::Up, b, 50.0, scroll(300.0, 260.0)));
        assert!(should_stalk(Direction::Up, b, 80.0, scroll(300.0, 260.0)));
    }
}
