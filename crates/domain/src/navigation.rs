//! Directional navigation: arrow keys move between sibling photos/albums.
//!
//! Pages declare anchors per direction. The [`NavigationIndex`] keeps them in
//! document order and resolves a key press to the *last* anchor declared for
//! its direction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Map a legacy `keyCode` (37–40) to a direction.
    #[must_use]
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Self::Left),
            38 => Some(Self::Up),
            39 => Some(Self::Right),
            40 => Some(Self::Down),
            _ => None,
        }
    }

    /// Map a `KeyboardEvent.key` value (`"ArrowLeft"`, ...) to a direction.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowRight" | "Right" => Some(Self::Right),
            "ArrowDown" | "Down" => Some(Self::Down),
            _ => None,
        }
    }

    /// Upward navigation competes with scrolling, so it only applies at the
    /// top of the page.
    #[must_use]
    pub fn requires_top_of_page(self) -> bool {
        matches!(self, Self::Up)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction `{0}`")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "up" => Ok(Self::Up),
            "right" => Ok(Self::Right),
            "down" => Ok(Self::Down),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// A single directional key press, with the page context needed to judge it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPress {
    pub direction: Direction,
    /// Vertical scroll offset of the page when the key went down.
    pub scroll_top: f64,
    /// Ctrl, Alt or Meta was held.
    pub modified: bool,
    /// Focus was inside an input, textarea, select or contenteditable.
    pub in_editable: bool,
}

impl KeyPress {
    /// A bare key press at the top of the page.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            scroll_top: 0.0,
            modified: false,
            in_editable: false,
        }
    }

    #[must_use]
    pub fn scrolled_to(mut self, scroll_top: f64) -> Self {
        self.scroll_top = scroll_top;
        self
    }

    #[must_use]
    pub fn with_modifier(mut self) -> Self {
        self.modified = true;
        self
    }

    #[must_use]
    pub fn in_editable(mut self) -> Self {
        self.in_editable = true;
        self
    }

    /// Whether this press may navigate at all.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        if self.modified || self.in_editable {
            return false;
        }
        !self.direction.requires_top_of_page() || self.scroll_top <= 0.0
    }
}

/// A page element tagged for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationAnchor {
    pub direction: Direction,
    pub href: Option<String>,
}

impl NavigationAnchor {
    #[must_use]
    pub fn new(direction: Direction, href: Option<String>) -> Self {
        Self { direction, href }
    }
}

/// Ordered registry of navigation anchors, built once per page.
#[derive(Debug, Clone, Default)]
pub struct NavigationIndex {
    anchors: Vec<NavigationAnchor>,
}

impl NavigationIndex {
    /// Build the index from anchors given in document order.
    #[must_use]
    pub fn new(anchors: impl IntoIterator<Item = NavigationAnchor>) -> Self {
        Self {
            anchors: anchors.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// The last anchor declared for `direction`.
    #[must_use]
    pub fn last_for(&self, direction: Direction) -> Option<&NavigationAnchor> {
        self.anchors
            .iter()
            .rev()
            .find(|anchor| anchor.direction == direction)
    }

    /// Resolve a key press to a navigation target.
    ///
    /// Only the last anchor for the direction is considered; when it carries
    /// no target there is no navigation, even if an earlier anchor has one.
    #[must_use]
    pub fn resolve(&self, press: &KeyPress) -> Option<&str> {
        if !press.is_navigable() {
            return None;
        }
        self.last_for(press.direction)
            .and_then(|anchor| anchor.href.as_deref())
            .filter(|href| !href.is_empty())
    }
}
