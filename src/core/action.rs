//! Click actions.
//!
//! The only thing a player does is click a face. A click names the cube and
//! the orientation of the clicked face; the face's identity does not matter,
//! only where it sits.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::orientation::Orientation;

/// A click on the face at `clicked` of cube `cube` (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Click {
    /// Index of the cube in the game state.
    pub cube: usize,

    /// Orientation of the clicked face.
    pub clicked: Orientation,
}

impl Click {
    /// Create a click.
    #[must_use]
    pub const fn new(cube: usize, clicked: Orientation) -> Self {
        Self { cube, clicked }
    }
}

impl fmt::Display for Click {
    /// Cubes are shown 1-based, matching the CLI.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cube {} {}", self.cube + 1, self.clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let click = Click::new(0, Orientation::Left);
        assert_eq!(click.to_string(), "cube 1 left");
    }

    #[test]
    fn test_click_serialization() {
        let click = Click::new(3, Orientation::Down);
        let json = serde_json::to_string(&click).unwrap();
        let deserialized: Click = serde_json::from_str(&json).unwrap();

        assert_eq!(click, deserialized);
    }
}
