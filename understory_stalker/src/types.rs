// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: directions, edges, signals, and timestamps.

use alloc::string::{String, ToString};

/// Host-supplied monotonic timestamp in milliseconds.
///
/// The controller never reads a clock; every entry point receives `now` from the host.
pub type Millis = u64;

/// Stacking order given to a stalking element so it renders above page content.
pub const STALKER_Z_INDEX: i32 = 50;

/// Scroll direction in which an element follows the user.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Follow once the user scrolls below the element's original top.
    #[default]
    Down,
    /// Follow while the element's original bottom is below the visible viewport.
    Up,
}

impl Direction {
    /// The viewport edge a stalking element is pinned to.
    pub const fn edge(self) -> Edge {
        match self {
            Self::Down => Edge::Top,
            Self::Up => Edge::Bottom,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`](core::str::FromStr).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Direction`] from text.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown stalking direction `{0}` (expected `down` or `up`)")]
pub struct ParseDirectionError(pub String);

impl core::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Viewport edge a stalking element is pinned to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Top edge (`direction = down`).
    Top,
    /// Bottom edge (`direction = up`).
    Bottom,
}

impl Edge {
    /// Style property naming this edge.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Global signals a controller reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Signal {
    /// The page scrolled.
    Scroll,
    /// The viewport was resized (or zoomed).
    Resize,
    /// Time advanced; only fires a due delayed activation.
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_maps_to_edge() {
        assert_eq!(Direction::Down.edge(), Edge::Top);
        assert_eq!(Direction::Up.edge(), Edge::Bottom);
        assert_eq!(Edge::Top.property(), "top");
        assert_eq!(Edge::Bottom.property(), "bottom");
        assert_eq!(Direction::default(), Direction::Down);
    }

    #[test]
    fn direction_parse_and_display() {
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" up ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(Direction::Up.to_string(), "up");
        let err = "left".parse::<Direction>().unwrap_err();
        assert_eq!(err, ParseDirectionError("left".into()));
        assert_eq!(
            err.to_string(),
            "unknown stalking direction `left` (expected `down` or `up`)"
        );
    }
}
