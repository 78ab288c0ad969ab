//! # instant-insanity
//!
//! An engine for a variant of the "Instant Insanity" cube puzzle.
//!
//! Four cubes carry four kinds of face. Clicking a face rotates its cube;
//! the puzzle is solved when each of the up, front, down and back
//! orientations shows four different values across the cubes.
//!
//! ## Design
//!
//! 1. **Pure rules**: rotation and goal validation are plain functions over
//!    explicit arguments. The rotation table is an exhaustive `match`.
//!
//! 2. **One owner**: a [`Session`] owns the game state and is the only thing
//!    that mutates it. Every click runs rotate, validate, save.
//!
//! 3. **Forgiving persistence**: the state is stored as base64-encoded JSON
//!    under a single key. Anything that fails to load means "start fresh".
//!
//! ## Modules
//!
//! - `core`: orientations, faces, cubes, state, clicks, configuration, RNG
//! - `rules`: rotation table and goal validation
//! - `storage`: storage backends and the state codec
//! - `session`: the click cycle over an owned state
//! - `solver`: search for a solving set of clicks
//! - `render`: text rendering of the cubes and goals

pub mod core;
pub mod rules;
pub mod storage;
pub mod session;
pub mod solver;
pub mod render;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Orientation, ParseOrientationError, Face, FaceValue, Cube,
    GameState, Goal, Validity, Click, PuzzleConfig, ScrambleRng,
};

pub use crate::rules::{rotate, rotation, validate, goal_validity, is_solved};

pub use crate::storage::{
    Storage, StorageError, MemoryStorage, FileStorage,
    CodecError, encode_state, decode_state, load_state, save_state,
};

pub use crate::session::Session;
pub use crate::solver::{solve, reachable_orientations, Solution};
pub use crate::render::{render_state, GlyphStyle};
pub use crate::error::{InsanityError, Result};
