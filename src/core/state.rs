//! Game state: cubes and goals.
//!
//! ## GameState
//!
//! - Ordered cubes (four in the classic puzzle)
//! - Ordered goals, one per checked orientation
//!
//! Goal validity is a cache over the cubes. It is recomputed by
//! [`crate::rules::validate`] after every rotation and after loading, so a
//! stale value in persisted data is harmless.

use serde::{Deserialize, Serialize};

use super::cube::Cube;
use super::orientation::Orientation;

/// Whether a goal currently holds.
///
/// Serialized as `"valid"` / `"invalid"`. Booleans are accepted on input,
/// since a never-validated state stores `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "ValidityRepr")]
pub enum Validity {
    Valid,
    #[default]
    Invalid,
}

impl Validity {
    /// Check if valid.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValidityRepr {
    Flag(bool),
    Named(NamedValidity),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum NamedValidity {
    Valid,
    Invalid,
}

impl From<ValidityRepr> for Validity {
    fn from(repr: ValidityRepr) -> Self {
        match repr {
            ValidityRepr::Flag(flag) => flag.into(),
            ValidityRepr::Named(NamedValidity::Valid) => Validity::Valid,
            ValidityRepr::Named(NamedValidity::Invalid) => Validity::Invalid,
        }
    }
}

/// A goal: all cubes must show distinct values at `orientation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    /// The orientation being checked.
    #[serde(rename = "face")]
    pub orientation: Orientation,

    /// Cached result of the last validation.
    pub valid: Validity,
}

impl Goal {
    /// Create an unvalidated goal.
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            valid: Validity::Invalid,
        }
    }
}

/// Complete puzzle state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The cubes, in display order.
    pub cubes: Vec<Cube>,

    /// The goals, in display order.
    pub goals: Vec<Goal>,
}

impl GameState {
    /// Create a state with unvalidated goals for the given orientations.
    #[must_use]
    pub fn new(cubes: Vec<Cube>, goal_orientations: &[Orientation]) -> Self {
        Self {
            cubes,
            goals: goal_orientations.iter().copied().map(Goal::new).collect(),
        }
    }

    /// Number of cubes.
    #[must_use]
    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }

    /// Get a cube by index.
    #[must_use]
    pub fn cube(&self, index: usize) -> Option<&Cube> {
        self.cubes.get(index)
    }

    /// Get a mutable cube by index.
    pub fn cube_mut(&mut self, index: usize) -> Option<&mut Cube> {
        self.cubes.get_mut(index)
    }

    /// Get the goal for an orientation.
    #[must_use]
    pub fn goal(&self, orientation: Orientation) -> Option<&Goal> {
        self.goals.iter().find(|g| g.orientation == orientation)
    }

    /// Check that every cube is well formed.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cubes.iter().all(Cube::is_well_formed)
    }
}
