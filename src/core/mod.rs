//! Core puzzle types: orientations, faces, cubes, state, clicks, configuration.
//!
//! Nothing here knows how a cube rotates or when a goal holds; that lives
//! in [`crate::rules`].

pub mod orientation;
pub mod face;
pub mod cube;
pub mod state;
pub mod action;
pub mod config;
pub mod rng;

pub use orientation::{Orientation, ParseOrientationError};
pub use face::{Face, FaceValue};
pub use cube::Cube;
pub use state::{GameState, Goal, Validity};
pub use action::Click;
pub use config::{PuzzleConfig, CLASSIC_GOALS, DEFAULT_STORAGE_KEY};
pub use rng::ScrambleRng;
