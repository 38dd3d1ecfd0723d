// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style overrides applied while an element is stalking.
//!
//! A [`StalkerStyle`] is either a map of declarations merged over the base
//! override, or a class name attached next to it. The variant is picked once,
//! when options are built or deserialized.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};

/// Ordered property → value declarations.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    /// Set a declaration, replacing any previous value.
    pub fn set(&mut self, property: &str, value: &str) {
        self.0.insert(property.to_string(), value.to_string());
    }

    /// Look up a declaration.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Returns true if the map has no declarations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate declarations in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other`; its declarations win.
    pub fn merged(mut self, other: &Self) -> Self {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
        self
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Visual override while stalking.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StalkerStyle {
    /// Declarations merged over the base override.
    Map(StyleMap),
    /// Class attached in addition to the base override.
    Class(String),
}

impl Default for StalkerStyle {
    fn default() -> Self {
        Self::Map(StyleMap::new())
    }
}

impl StalkerStyle {
    /// Width to keep while stalking, when the map pins one in pixels.
    ///
    /// Class-based styles and non-pixel widths (for example percentages)
    /// return `None`; the placeholder's width is used instead.
    pub fn pinned_width(&self) -> Option<f64> {
        match self {
            Self::Map(map) => parse_px(map.get("width")?),
            Self::Class(_) => None,
        }
    }
}

impl From<StyleMap> for StalkerStyle {
    fn from(map: StyleMap) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for StalkerStyle {
    fn from(class: &str) -> Self {
        Self::Class(class.to_string())
    }
}

/// Format a pixel length, e.g. `10px` or `-50px`.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Parse `"12px"` or `"12"` into pixels.
pub fn parse_px(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim_end();
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formatting_drops_trailing_zero() {
        assert_eq!(px(10.0), "10px");
        assert_eq!(px(-50.0), "-50px");
        assert_eq!(px(12.5), "12.5px");
    }

    #[test]
    fn pinned_width_only_for_pixel_maps() {
        let map = StalkerStyle::Map(StyleMap::new().with("width", "240px"));
        assert_eq!(map.pinned_width(), Some(240.0));
        let pct = StalkerStyle::Map(StyleMap::new().with("width", "50%"));
        assert_eq!(pct.pinned_width(), None);
        assert_eq!(StalkerStyle::default().pinned_width(), None);
        assert_eq!(StalkerStyle::from("stuck").pinned_width(), None);
    }

    #[test]
    fn merge_overrides_base() {
        let base: StyleMap = [("width", "100px"), ("z-index", "50")].into_iter().collect();
        let user = StyleMap::new().with("z-index", "900").with("color", "red");
        let merged = base.merged(&user);
        let all: alloc::vec::Vec<_> = merged.iter().collect();
        assert_eq!(
            all,
            [("color", "red"), ("width", "100px"), ("z-index", "900")]
        );
    }
}
