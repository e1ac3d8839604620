//! Resting positions for scrolling elements.
//!
//! Elements scroll from right to left; a [`TargetKind`] says where an element
//! should stop (or, once dismissed, where it is forced to go).

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gap in cells kept between an element and the viewport edge for the
/// `Left` and `Right` targets, and past the left edge for `Offscreen`.
pub const EDGE_MARGIN: i32 = 50;

/// Where an element comes to rest horizontally.
///
/// A closed set: every variant maps to one offset formula in
/// [`TargetKind::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Horizontally centered in the viewport.
    #[default]
    #[serde(alias = "center")]
    Centered,
    /// Right-aligned, [`EDGE_MARGIN`] cells from the right edge.
    Right,
    /// Left-aligned, [`EDGE_MARGIN`] cells from the left edge.
    Left,
    /// Fully past the left edge of the viewport.
    Offscreen,
}

impl TargetKind {
    /// All variants, in declaration order.
    pub const ALL: [TargetKind; 4] = [
        TargetKind::Centered,
        TargetKind::Right,
        TargetKind::Left,
        TargetKind::Offscreen,
    ];

    /// Horizontal offset of this target for a bitmap of `bitmap_width` in a
    /// viewport of `viewport_width`.
    ///
    /// Halves use integer division. A bitmap wider than the viewport simply
    /// produces a negative offset for `Centered` and `Right`.
    pub fn offset(self, viewport_width: i32, bitmap_width: i32) -> i32 {
        match self {
            TargetKind::Centered => viewport_width / 2 - bitmap_width / 2,
            TargetKind::Right => viewport_width - (bitmap_width + EDGE_MARGIN),
            TargetKind::Left => EDGE_MARGIN,
            TargetKind::Offscreen => -(bitmap_width + EDGE_MARGIN),
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Centered => "centered",
            TargetKind::Right => "right",
            TargetKind::Left => "left",
            TargetKind::Offscreen => "offscreen",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown target name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target '{0}' (expected centered, right, left or offscreen)")]
pub struct ParseTargetError(pub String);

impl FromStr for TargetKind {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centered" | "center" => Ok(TargetKind::Centered),
            "right" => Ok(TargetKind::Right),
            "left" => Ok(TargetKind::Left),
            "offscreen" => Ok(TargetKind::Offscreen),
            _ => Err(ParseTargetError(s.to_string())),
        }
    }
}
