//! Cube orientations.
//!
//! Every face of a cube sits at exactly one of six orientations. The set is
//! closed, so lookups keyed by orientation are exhaustive `match`es rather
//! than runtime maps.
//!
//! ## Layout
//!
//! The unfolded net used for display:
//!
//! ```text
//!     +---+
//!     | U |
//! +---+---+---+
//! | L | F | R |
//! +---+---+---+
//!     | D |
//!     +---+
//!     | B |
//!     +---+
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a face currently sits on its cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Orientation {
    /// All six orientations.
    pub const ALL: [Orientation; 6] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Front,
        Orientation::Back,
        Orientation::Left,
        Orientation::Right,
    ];

    /// Lowercase name, as used in the persisted state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
            Orientation::Front => "front",
            Orientation::Back => "back",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }

    /// Index into [`Orientation::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Orientation::Up => 0,
            Orientation::Down => 1,
            Orientation::Front => 2,
            Orientation::Back => 3,
            Orientation::Left => 4,
            Orientation::Right => 5,
        }
    }

    /// Side faces are drawn dimmed and never take part in a goal.
    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a string names no orientation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown orientation `{0}` (expected up, down, front, back, left or right)")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Accepts full names in any case and the one-letter shorthands
    /// `u d f b l r`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Orientation::Up),
            "down" | "d" => Ok(Orientation::Down),
            "front" | "f" => Ok(Orientation::Front),
            "back" | "b" => Ok(Orientation::Back),
            "left" | "l" => Ok(Orientation::Left),
            "right" | "r" => Ok(Orientation::Right),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}
