//! Faces and their labels.
//!
//! A `Face` pairs a mutable orientation with an immutable `FaceValue`.
//! Rotations only ever touch the orientation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::orientation::Orientation;

/// The label printed on a face. Four kinds, one per suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceValue {
    A,
    B,
    C,
    D,
}

impl FaceValue {
    /// All four labels.
    pub const ALL: [FaceValue; 4] = [FaceValue::A, FaceValue::B, FaceValue::C, FaceValue::D];

    /// Single-letter name.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            FaceValue::A => 'A',
            FaceValue::B => 'B',
            FaceValue::C => 'C',
            FaceValue::D => 'D',
        }
    }

    /// Suit glyph shown on the face.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            FaceValue::A => '♥',
            FaceValue::B => '♦',
            FaceValue::C => '♣',
            FaceValue::D => '♠',
        }
    }

    /// Background color of the face, as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            FaceValue::A => "#e41a1c",
            FaceValue::B => "#377eb8",
            FaceValue::C => "#4daf4a",
            FaceValue::D => "#984ea3",
        }
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One face of a cube.
///
/// Serialized as `{"face": "<orientation>", "value": "<letter>"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    /// Where the face currently sits.
    #[serde(rename = "face")]
    pub orientation: Orientation,

    /// Which kind of face this is. Never changes.
    pub value: FaceValue,
}

impl Face {
    /// Create a face.
    #[must_use]
    pub const fn new(orientation: Orientation, value: FaceValue) -> Self {
        Self { orientation, value }
    }
}
