//! Quick terminal docking position.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen edge (or center) the quick terminal panel is anchored to.
///
/// Parsed from the `position` setting using the literal keys `top`, `bottom`,
/// `left`, `right` and `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuickTerminalPosition {
    /// Slides down from the top edge, spanning the full screen width (default)
    #[default]
    Top,
    /// Slides up from the bottom edge, spanning the full screen width
    Bottom,
    /// Slides in from the left edge, spanning the full screen height
    Left,
    /// Slides in from the right edge, spanning the full screen height
    Right,
    /// Fades in centered on the screen, keeping its own size
    Center,
}

impl QuickTerminalPosition {
    /// Config key for this position
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickTerminalPosition::Top => "top",
            QuickTerminalPosition::Bottom => "bottom",
            QuickTerminalPosition::Left => "left",
            QuickTerminalPosition::Right => "right",
            QuickTerminalPosition::Center => "center",
        }
    }

    /// All available positions for UI iteration
    pub fn all() -> &'static [QuickTerminalPosition] {
        &[
            QuickTerminalPosition::Top,
            QuickTerminalPosition::Bottom,
            QuickTerminalPosition::Left,
            QuickTerminalPosition::Right,
            QuickTerminalPosition::Center,
        ]
    }
}

impl fmt::Display for QuickTerminalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickTerminalPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(QuickTerminalPosition::Top),
            "bottom" => Ok(QuickTerminalPosition::Bottom),
            "left" => Ok(QuickTerminalPosition::Left),
            "right" => Ok(QuickTerminalPosition::Right),
            "center" => Ok(QuickTerminalPosition::Center),
            _ => Err(ConfigError::InvalidPosition(s.to_string())),
        }
    }
}
