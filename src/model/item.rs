//! Ticker items as configured, before they become scrolling elements.

use super::target::TargetKind;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether an element wraps around instead of settling at its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Slide to the target and stop.
    Never,
    /// Scroll continuously as a repeating band.
    Always,
    /// Loop only when the item is wider than the viewport.
    #[default]
    Auto,
}

impl LoopMode {
    /// Decide whether an item of `bitmap_width` loops in a viewport of
    /// `viewport_width`.
    pub fn should_loop(self, bitmap_width: u16, viewport_width: u16) -> bool {
        match self {
            LoopMode::Never => false,
            LoopMode::Always => true,
            LoopMode::Auto => bitmap_width > viewport_width,
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            LoopMode::Never => "never",
            LoopMode::Always => "always",
            LoopMode::Auto => "auto",
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown loop mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown loop mode '{0}' (expected never, always or auto)")]
pub struct ParseLoopModeError(pub String);

impl FromStr for LoopMode {
    type Err = ParseLoopModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(LoopMode::Never),
            "always" => Ok(LoopMode::Always),
            "auto" => Ok(LoopMode::Auto),
            _ => Err(ParseLoopModeError(s.to_string())),
        }
    }
}

/// One ticker entry.
///
/// Optional fields fall back to the global settings when the item is
/// spawned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    /// Text to display; `\n` starts a new row.
    pub text: String,

    /// Resting position.
    #[serde(default)]
    pub target: Option<TargetKind>,

    /// Loop behaviour.
    #[serde(default)]
    pub loop_mode: Option<LoopMode>,

    /// Cells per frame.
    #[serde(default)]
    pub speed: Option<i32>,

    /// Fixed row; when absent, items stack downward.
    #[serde(default)]
    pub row: Option<u16>,

    /// Foreground color: a ratatui color name or `#rrggbb`.
    #[serde(default)]
    pub color: Option<String>,
}

impl ItemSpec {
    /// An item with only text set.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
            loop_mode: None,
            speed: None,
            row: None,
            color: None,
        }
    }
}
