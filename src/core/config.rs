//! Puzzle configuration.
//!
//! A `PuzzleConfig` names:
//! - The storage key the session persists under
//! - The goal orientations to check
//! - The cubes a fresh session starts from
//!
//! `PuzzleConfig::classic()` is the four-cube puzzle with goals on the four
//! faces that wrap around the stack (up, front, down, back).

use serde::{Deserialize, Serialize};

use super::cube::Cube;
use super::face::FaceValue::{self, A, B, C, D};
use super::orientation::Orientation::{self, Back, Down, Front, Left, Right, Up};
use super::state::GameState;

/// Storage key used by the classic puzzle.
pub const DEFAULT_STORAGE_KEY: &str = "mrhen-insanity";

/// Goal orientations of the classic puzzle. Left and right are never goals.
pub const CLASSIC_GOALS: [Orientation; 4] = [Up, Front, Down, Back];

/// Configuration for a puzzle session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Key of the storage slot holding the encoded state.
    pub storage_key: String,

    /// Orientations checked by the goals, in display order.
    pub goals: Vec<Orientation>,

    /// Cubes of a fresh session.
    pub initial_cubes: Vec<Cube>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl PuzzleConfig {
    /// The classic four-cube puzzle.
    #[must_use]
    pub fn classic() -> Self {
        // Values per cube, listed left, front, right, back, up, down.
        let rows: [[FaceValue; 6]; 4] = [
            [A, B, A, D, A, C],
            [B, B, A, C, A, D],
            [C, D, C, B, D, A],
            [B, B, D, C, C, A],
        ];

        let initial_cubes = rows
            .iter()
            .map(|&[left, front, right, back, up, down]| {
                Cube::from_pairs([
                    (Left, left),
                    (Front, front),
                    (Right, right),
                    (Back, back),
                    (Up, up),
                    (Down, down),
                ])
            })
            .collect();

        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            goals: CLASSIC_GOALS.to_vec(),
            initial_cubes,
        }
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Replace the goal orientations.
    #[must_use]
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = Orientation>) -> Self {
        self.goals = goals.into_iter().collect();
        self
    }

    /// Replace the starting cubes.
    #[must_use]
    pub fn with_cubes(mut self, cubes: Vec<Cube>) -> Self {
        self.initial_cubes = cubes;
        self
    }

    /// Build the unvalidated starting state.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.initial_cubes.clone(), &self.goals)
    }
}
