//! A single puzzle cube.
//!
//! A cube is an unordered collection of six faces whose orientations form a
//! permutation of [`Orientation::ALL`]. Face order never changes; rotations
//! rewrite orientations in place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::face::{Face, FaceValue};
use super::orientation::Orientation;

/// Six labeled faces.
///
/// Serialized as a bare JSON array of faces. Deserialization does not
/// enforce the permutation invariant; use [`Cube::is_well_formed`] when the
/// source is untrusted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cube {
    faces: SmallVec<[Face; 6]>,
}

impl Cube {
    /// Create a cube from its faces.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = Face>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Create a cube from `(orientation, value)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: [(Orientation, FaceValue); 6]) -> Self {
        Self::new(pairs.into_iter().map(|(o, v)| Face::new(o, v)))
    }

    /// All faces, in their original order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable access to the faces.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// The face currently at `orientation`, if any.
    #[must_use]
    pub fn face(&self, orientation: Orientation) -> Option<&Face> {
        self.faces.iter().find(|f| f.orientation == orientation)
    }

    /// The value showing at `orientation`, if any.
    #[must_use]
    pub fn value_at(&self, orientation: Orientation) -> Option<FaceValue> {
        self.face(orientation).map(|f| f.value)
    }

    /// Check that there are six faces and each orientation appears once.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.faces.len() != Orientation::ALL.len() {
            return false;
        }
        let mut seen = [false; 6];
        for face in &self.faces {
            let slot = &mut seen[face.orientation.index()];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Orientation-indexed snapshot of the values, for comparing positions
    /// independently of face order.
    ///
    /// Returns `None` for a malformed cube.
    #[must_use]
    pub fn layout(&self) -> Option<[FaceValue; 6]> {
        if !self.is_well_formed() {
            return None;
        }
        let mut layout = [FaceValue::A; 6];
        for face in &self.faces {
            layout[face.orientation.index()] = face.value;
        }
        Some(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cube {
        Cube::from_pairs([
            (Orientation::Left, FaceValue::A),
            (Orientation::Front, FaceValue::B),
            (Orientation::Right, FaceValue::A),
            (Orientation::Back, FaceValue::D),
            (Orientation::Up, FaceValue::A),
            (Orientation::Down, FaceValue::C),
        ])
    }

    #[test]
    fn test_face_lookup() {
        let cube = sample();
        assert_eq!(cube.value_at(Orientation::Front), Some(FaceValue::B));
        assert_eq!(cube.value_at(Orientation::Down), Some(FaceValue::C));
        assert_eq!(cube.faces().len(), 6);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample().is_well_formed());

        let mut duplicate = sample();
        duplicate.faces_mut()[0].orientation = Orientation::Up;
        assert!(!duplicate.is_well_formed());

        let short = Cube::new(sample().faces()[..5].iter().copied());
        assert!(!short.is_well_formed());
    }

    #[test]
    fn test_layout() {
        let layout = sample().layout().unwrap();
        assert_eq!(layout[Orientation::Up.index()], FaceValue::A);
        assert_eq!(layout[Orientation::Back.index()], FaceValue::D);

        let mut broken = sample();
        broken.faces_mut()[1].orientation = Orientation::Left;
        assert_eq!(broken.layout(), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let cube = sample();
        let json = serde_json::to_string(&cube).unwrap();
        assert!(json.starts_with(r#"[{"face":"left","value":"A"}"#));

        let deserialized: Cube = serde_json::from_str(&json).unwrap();
        assert_eq!(cube, deserialized);
    }
}
