// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance configuration: plain data in [`Config`], callbacks in [`Options`].
//!
//! Unspecified fields keep their defaults. With the `serde` feature, `Config`
//! deserializes from any format; missing keys default and unknown keys are ignored.
//!
//! ```
//! use understory_stalker::{Direction, Options, StyleMap};
//!
//! let opts: Options<u32> = Options::new()
//!     .direction(Direction::Up)
//!     .offset(10)
//!     .stalker_style(StyleMap::new().with("background", "white"))
//!     .on_start(|el| assert_eq!(el, 7));
//! assert_eq!(opts.config.offset, 10);
//! assert_eq!(opts.config.delay, 0);
//! ```

use alloc::rc::Rc;

use crate::style::StalkerStyle;
use crate::types::Direction;

/// Lifecycle callback; receives the tracked element.
pub type Callback<K> = Rc<dyn Fn(K)>;

/// Data options of a stalking element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Which scroll direction triggers stalking.
    pub direction: Direction,
    /// Gap in pixels from the viewport edge while stalking.
    pub offset: i32,
    /// Visual override while stalking.
    pub stalker_style: StalkerStyle,
    /// Milliseconds before the activation takes visual effect.
    pub delay: u32,
}

/// Full options: [`Config`] plus lifecycle callbacks.
///
/// Cloning is cheap for the callbacks (shared `Rc`), so one value can configure many elements.
pub struct Options<K> {
    /// Data options.
    pub config: Config,
    /// Fired on every transition into stalking, right after it is initiated.
    pub on_start: Option<Callback<K>>,
    /// Fired on every transition back to resting, with the restored element.
    pub on_stop: Option<Callback<K>>,
}

impl<K> Clone for Options<K> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            on_start: self.on_start.clone(),
            on_stop: self.on_stop.clone(),
        }
    }
}

impl<K> Default for Options<K> {
    fn default() -> Self {
        Self {
            config: Config::default(),
            on_start: None,
            on_stop: None,
        }
    }
}

impl<K> core::fmt::Debug for Options<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Options")
            .field("config", &self.config)
            .field("on_start", &self.on_start.is_some())
            .field("on_stop", &self.on_stop.is_some())
            .finish()
    }
}

impl<K> From<Config> for Options<K> {
    fn from(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl<K> Options<K> {
    /// Defaults: direction down, offset 0, empty style map, no delay, no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Set the pixel gap from the viewport edge.
    pub fn offset(mut self, offset: i32) -> Self {
        self.config.offset = offset;
        self
    }

    /// Set the style map or class applied while stalking.
    pub fn stalker_style(mut self, style: impl Into<StalkerStyle>) -> Self {
        self.config.stalker_style = style.into();
        self
    }

    /// Set the activation delay in milliseconds.
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.config.delay = delay_ms;
        self
    }

    /// Set the start callback.
    pub fn on_start(mut self, f: impl Fn(K) + 'static) -> Self {
        self.on_start = Some(Rc::new(f));
        self
    }

    /// Set the stop callback.
    pub fn on_stop(mut self, f: impl Fn(K) + 'static) -> Self {
        self.on_stop = Some(Rc::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleMap;

    #[test]
    fn defaults_match_documented_values() {
        let c = Config::default();
        assert_eq!(c.direction, Direction::Down);
        assert_eq!(c.offset, 0);
        assert_eq!(c.delay, 0);
        assert_eq!(c.stalker_style, StalkerStyle::Map(StyleMap::new()));
        let o: Options<u8> = Options::new();
        assert!(o.on_start.is_none() && o.on_stop.is_none());
    }

    #[test]
    fn clones_share_callbacks() {
        let o: Options<u8> = Options::new().on_start(|_| {}).stalker_style("stuck");
        let c = o.clone();
        assert!(Rc::ptr_eq(
            o.on_start.as_ref().unwrap(),
            c.on_start.as_ref().unwrap()
        ));
        assert_eq!(c.config.stalker_style, StalkerStyle::Class("stuck".into()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_merges_over_defaults() {
        let c: Config =
            serde_json::from_str(r#"{"offset": 10, "direction": "up", "bogus": true}"#).unwrap();
        assert_eq!(c.direction, Direction::Up);
        assert_eq!(c.offset, 10);
        assert_eq!(c.delay, 0);
        assert_eq!(c.stalker_style, StalkerStyle::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_style_variants() {
        let map: Config =
            serde_json::from_str(r#"{"stalker_style": {"width": "240px"}}"#).unwrap();
        assert_eq!(map.stalker_style.pinned_width(), Some(240.0));
        let class: Config = serde_json::from_str(r#"{"stalker_style": "stuck"}"#).unwrap();
        assert_eq!(class.stalker_style, StalkerStyle::Class("stuck".into()));
        assert!(serde_json::from_str::<Config>(r#"{"direction": "left"}"#).is_err());
    }
}
