// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the flow tree: element identifiers, inline styles, and element data.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Identifier for an element in the document.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On [`remove`](crate::Document::remove), the slot is freed; any existing `ElementId`
///   that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// Detaching an element does not free its slot: a detached element keeps its id,
/// its style and its children, and can be inserted again later.
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check liveness.
/// Stale ids never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// CSS-like positioning scheme.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Position {
    /// Participates in the vertical block flow.
    #[default]
    Static,
    /// Removed from the flow and placed relative to the viewport.
    Fixed,
}

/// Ordered property map of style declarations.
///
/// Values are kept as text (for example `"10px"` or `"fixed"`); the typed
/// accessors parse what layout needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    props: BTreeMap<String, String>,
}

impl Style {
    /// Create an empty style.
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
        self.props.insert(property.to_string(), value.to_string());
    }

    /// Remove a declaration, returning its previous value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.props.remove(property)
    }

    /// Look up a declaration.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.props.get(property).map(String::as_str)
    }

    /// Returns true if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Iterate declarations in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of `self`; declarations in `other` win.
    pub fn extend_from(&mut self, other: &Self) {
        for (k, v) in &other.props {
            self.props.insert(k.clone(), v.clone());
        }
    }

    /// Parse a pixel length. Accepts `"12px"`, `"12"`, and `"-3.5px"`.
    ///
    /// Returns `None` for missing, `auto`, percentage, or otherwise unparsable values.
    pub fn px(&self, property: &str) -> Option<f64> {
        parse_px(self.get(property)?)
    }

    /// Positioning scheme. Anything other than `fixed` is treated as static flow.
    pub fn position(&self) -> Position {
        match self.get("position") {
            Some("fixed") => Position::Fixed,
            _ => Position::Static,
        }
    }
}

/// Parse a CSS pixel length such as `"12px"` or `"12"`.
pub fn parse_px(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim_end();
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Element data: what an element is, independent of where it sits in the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Tag or debug label.
    pub tag: String,
    /// Height of the element's own content, excluding in-flow children.
    pub content_height: f64,
    /// Inline style; overrides class rules.
    pub style: Style,
    /// Class names, in the order they were added.
    pub classes: Vec<String>,
}

impl Element {
    /// Create an element with the given tag and no content.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style content height.
    pub fn with_content_height(mut self, height: f64) -> Self {
        self.content_height = height;
        self
    }

    /// Builder-style inline declaration.
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.style.set(property, value);
        self
    }

    /// Builder-style class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Returns true if the class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
